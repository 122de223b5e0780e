//! Embedded word list
//!
//! A curated list of common five-letter words compiled into the binary, used
//! when no word-list file is supplied. Canonical uppercase form.

/// Words accepted as guesses and eligible as targets.
pub const WORDS: &[&str] = &[
    "ABOUT", "ABOVE", "ACTOR", "ADMIT", "ADOPT", "AFTER", "AGAIN", "AGENT", "AGREE", "AHEAD",
    "ALARM", "ALBUM", "ALERT", "ALIKE", "ALIVE", "ALLEY", "ALLOW", "ALONE", "ALONG", "ALTER",
    "ANGER", "ANGLE", "ANGRY", "APART", "APPLE", "APPLY", "ARENA", "ARGUE", "ARISE", "ARRAY",
    "ASIDE", "ASSET", "AUDIO", "AVOID", "AWAKE", "AWARD", "AWARE", "BADGE", "BAKER", "BASIC",
    "BEACH", "BEGAN", "BEGIN", "BEING", "BELOW", "BENCH", "BIRTH", "BLACK", "BLADE", "BLAME",
    "BLANK", "BLAST", "BLEND", "BLIND", "BLOCK", "BLOOD", "BOARD", "BOOST", "BOUND", "BRAIN",
    "BRAND", "BRAVE", "BREAD", "BREAK", "BRICK", "BRIDE", "BRIEF", "BRING", "BROAD", "BROWN",
    "BUILD", "BUYER", "CABIN", "CABLE", "CANDY", "CARGO", "CARRY", "CATCH", "CAUSE", "CHAIN",
    "CHAIR", "CHALK", "CHARM", "CHART", "CHASE", "CHEAP", "CHECK", "CHESS", "CHEST", "CHIEF",
    "CHILD", "CHOIR", "CHOSE", "CIVIC", "CIVIL", "CLAIM", "CLASS", "CLEAN", "CLEAR", "CLIMB",
    "CLOCK", "CLOSE", "CLOUD", "COACH", "COAST", "COLOR", "COUNT", "COURT", "COVER", "CRAFT",
    "CRANE", "CRASH", "CREAM", "CRIME", "CROSS", "CROWD", "CROWN", "CURVE", "CYCLE", "DAILY",
    "DANCE", "DEATH", "DELAY", "DEPTH", "DOUBT", "DOZEN", "DRAFT", "DRAMA", "DREAM", "DRESS",
    "DRIFT", "DRINK", "DRIVE", "EAGER", "EARLY", "EARTH", "EERIE", "EIGHT", "ELECT", "EMPTY",
    "ENEMY", "ENJOY", "ENTER", "ENTRY", "EQUAL", "ERROR", "EVENT", "EVERY", "EXACT", "EXIST",
    "EXTRA", "FAITH", "FALSE", "FAULT", "FIBER", "FIELD", "FIFTH", "FIFTY", "FIGHT", "FINAL",
    "FIRST", "FLAME", "FLASH", "FLEET", "FLOOR", "FLOUR", "FLUID", "FOCUS", "FORCE", "FORGE",
    "FORTH", "FORTY", "FORUM", "FOUND", "FRAME", "FRESH", "FRONT", "FRUIT", "FULLY", "FUNNY",
    "GHOST", "GIANT", "GIVEN", "GLASS", "GLOBE", "GRACE", "GRADE", "GRAIN", "GRAND", "GRANT",
    "GRASS", "GREAT", "GREEN", "GROUP", "GUARD", "GUESS", "GUEST", "GUIDE", "HAPPY", "HEARD",
    "HEART", "HEAVY", "HORSE", "HOTEL", "HOUSE", "HUMAN", "HUMOR", "IDEAL", "IMAGE", "INDEX",
    "INNER", "INPUT", "ISSUE", "JOINT", "JUDGE", "JUICE", "KNIFE", "KNOCK", "KNOWN", "LABEL",
    "LARGE", "LASER", "LATER", "LAUGH", "LAYER", "LEARN", "LEAST", "LEAVE", "LEGAL", "LEVEL",
    "LIGHT", "LIMIT", "LOCAL", "LOGIC", "LOOSE", "LUCKY", "LUNCH", "MAGIC", "MAJOR", "MAKER",
    "MARCH", "MATCH", "MAYBE", "MAYOR", "MEANT", "MEDIA", "METAL", "MINOR", "MODEL", "MONEY",
    "MONTH", "MORAL", "MOTOR", "MOUNT", "MOUSE", "MOUTH", "MOVIE", "MUSIC", "NERVE", "NEVER",
    "NIGHT", "NOISE", "NORTH", "NOTED", "NOVEL", "NURSE", "OCCUR", "OCEAN", "OFFER", "OFTEN",
    "ORDER", "OTHER", "OUGHT", "OWNER", "PAINT", "PANEL", "PAPER", "PARTY", "PEACE", "PHASE",
    "PHONE", "PHOTO", "PIANO", "PIECE", "PILOT", "PITCH", "PLACE", "PLAIN", "PLANE", "PLANT",
    "PLATE", "POINT", "POUND", "POWER", "PRESS", "PRICE", "PRIDE", "PRIME", "PRINT", "PRIZE",
    "PROOF", "PROUD", "PROVE", "QUEEN", "QUICK", "QUIET", "QUITE", "RADIO", "RAISE", "RANGE",
    "RAPID", "RATIO", "REACH", "READY", "REALM", "REPLY", "RIGHT", "RIVAL", "RIVER", "ROUGH",
    "ROUND", "ROUTE", "ROYAL", "RURAL", "SCALE", "SCENE", "SCOPE", "SCORE", "SENSE", "SERVE",
    "SEVEN", "SHADE", "SHAKE", "SHALL", "SHAPE", "SHARE", "SHARP", "SHEET", "SHELF", "SHELL",
    "SHIFT", "SHINE", "SHIRT", "SHOCK", "SHOOT", "SHORE", "SHORT", "SIGHT", "SINCE", "SIXTH",
    "SKILL", "SLATE", "SLEEP", "SLICE", "SMALL", "SMART", "SMILE", "SMOKE", "SOLID", "SOLVE",
    "SORRY", "SOUND", "SOUTH", "SPACE", "SPARE", "SPEAK", "SPEED", "SPEND", "SPLIT", "SPOKE",
    "SPORT", "STAFF", "STAGE", "STAIR", "STAND", "START", "STATE", "STEAL", "STEAM", "STEEL",
    "STICK", "STILL", "STOCK", "STONE", "STOOD", "STORE", "STORM", "STORY", "STRIP", "STUDY",
    "STYLE", "SUGAR", "SUITE", "SUPER", "SWEET", "TABLE", "TAKEN", "TASTE", "TEACH", "TESTS",
    "THANK", "THEME", "THERE", "THESE", "THICK", "THING", "THINK", "THIRD", "THOSE", "THREE",
    "THREW", "THROW", "TIGHT", "TIMER", "TITLE", "TODAY", "TOKEN", "TOPIC", "TOTAL", "TOUCH",
    "TOUGH", "TOWER", "TRACK", "TRADE", "TRAIL", "TRAIN", "TREAT", "TREND", "TRIAL", "TRIBE",
    "TRICK", "TRIED", "TRUCK", "TRULY", "TRUST", "TRUTH", "TWICE", "UNCLE", "UNDER", "UNION",
    "UNITY", "UNTIL", "UPPER", "URBAN", "USAGE", "USUAL", "VALID", "VALUE", "VIDEO", "VIRUS",
    "VISIT", "VITAL", "VOCAL", "VOICE", "WASTE", "WATCH", "WATER", "WHEAT", "WHEEL", "WHERE",
    "WHICH", "WHILE", "WHITE", "WHOLE", "WHOSE", "WOMAN", "WORLD", "WORRY", "WORSE", "WORST",
    "WORTH", "WOULD", "WRITE", "WRONG", "WROTE", "YIELD", "YOUNG", "YOUTH",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_SIZE;

    #[test]
    fn every_word_is_canonical() {
        for &word in WORDS {
            assert_eq!(word.len(), WORD_SIZE, "word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "word '{word}' is not canonical uppercase"
            );
        }
    }

    #[test]
    fn no_duplicates() {
        let set: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(set.len(), WORDS.len());
    }

    #[test]
    fn contains_words_gameplay_relies_on() {
        for word in ["TESTS", "WRONG", "CRANE", "SLATE"] {
            assert!(WORDS.contains(&word), "'{word}' missing from embedded list");
        }
    }
}
