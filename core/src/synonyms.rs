/// Fixed query-expansion table mapping frequent corpus terms to a synonym.
/// Expansion is a reverse lookup: a query token matching some entry's
/// *synonym* pulls in the entry's source term. Empty synonyms never match
/// because the tokenizer emits no empty tokens.
const SYNONYMS: &[(&str, &str)] = &[
    ("district", "region"),
    ("house", "home"),
    ("season", "period"),
    ("football", "soccer"),
    ("amara", ""),
    ("disambiguation", ""),
    ("station", "stop"),
    ("2008", ""),
    ("school", "college"),
    ("list", ""),
    ("team", "group"),
    ("ban", "prohibit"),
    ("carolina", ""),
    ("john", ""),
    ("boston", ""),
    ("east", ""),
    ("pirates", "Caribbean"),
    ("celtics", ""),
    ("album", "music"),
    ("historic", "historical"),
    ("council", "board"),
    ("county", "state"),
    ("new", "latest"),
    ("island", "isle"),
    ("light", ""),
    ("league", "leagues"),
    ("united", "usa"),
    ("college", "university"),
    ("national", ""),
    ("farm", ""),
    ("film", "movie"),
    ("community", "public"),
    ("toyota", ""),
    ("corolla", ""),
    ("george", ""),
    ("2007", ""),
    ("louis", ""),
    ("men's", "men"),
    ("footballer", "player"),
    ("baseball", ""),
    ("lee", ""),
    ("mill", ""),
    ("william", ""),
    ("championship", ""),
    ("states", "county"),
    ("david", ""),
    ("university", "college"),
    ("election", "vote"),
    ("american", ""),
    ("sports", "sport"),
    ("hill", "hill"),
    ("club", ""),
    ("site", "location"),
    ("park", "garden"),
    ("blues", ""),
    ("international", "global"),
    ("baltimore", ""),
    ("european", "europa"),
    ("charles", ""),
    ("series", ""),
    ("cup", "world"),
    ("henry", ""),
    ("wrestling", "tussle"),
    ("summer", ""),
    ("olympics", "olympic"),
    ("trox", ""),
    ("company", "firm"),
    ("church", ""),
    ("thomas", ""),
    ("martin", ""),
    ("arnold", ""),
    ("south", ""),
    ("james", ""),
    ("high", "top"),
    ("khan", ""),
    ("musician", "music"),
    ("1992", ""),
    ("york", "new"),
    ("maryland", ""),
    ("williams", ""),
    ("jim", ""),
    ("bill", ""),
    ("street", "road"),
    ("war", "battle"),
    ("open", ""),
    ("north", ""),
    ("surname", "name"),
    ("metro", "subway"),
    ("railway", "rail"),
    ("group", "team"),
    ("rhode", ""),
    ("regiment", "unit"),
    ("black", ""),
    ("1920", ""),
    ("greco-roman", ""),
    ("rules", "rule"),
    ("discography", ""),
    ("paraguay", "Asuncin"),
    ("destinations", "destination"),
    ("people", "nation"),
];

/// Append, for each tokenized term, the first source term whose synonym
/// equals it. One bounded pass over the original tokens; appended terms are
/// not expanded again (the table contains cycles such as team <-> group).
pub fn expand(tokens: &mut Vec<String>) {
    let n = tokens.len();
    for i in 0..n {
        if let Some((source, _)) = SYNONYMS.iter().find(|(_, syn)| *syn == tokens[i]) {
            tokens.push((*source).to_string());
        }
    }
}
