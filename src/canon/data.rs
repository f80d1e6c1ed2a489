//! Embedded canon: verse counts per chapter and recognized spellings.
//!
//! Protocanonical books follow the King James versification. The
//! deuterocanonical books follow the KJV Apocrypha and may disagree with
//! Catholic editions by a verse here and there.

use super::BookId;

pub(super) struct BookData {
    pub id: BookId,
    pub title_pl: &'static str,
    pub title_en: &'static str,
    pub polish: &'static [&'static str],
    pub english: &'static [&'static str],
    pub chapters: &'static [u16],
}

pub(super) static BOOKS: &[BookData] = &[
    BookData {
        id: BookId::Genesis,
        title_pl: "Rdz",
        title_en: "Genesis",
        polish: &["Rdz", "Rodz", "Rodzaju"],
        english: &["Gen", "Gn", "Genesis"],
        chapters: &[
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34,
            24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38,
            34, 34, 28, 34, 31, 22, 33, 26,
        ],
    },
    BookData {
        id: BookId::Exodus,
        title_pl: "Wj",
        title_en: "Exodus",
        polish: &["Wj", "Wyj", "Wyjścia"],
        english: &["Ex", "Exod", "Exodus"],
        chapters: &[
            22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36,
            31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
        ],
    },
    BookData {
        id: BookId::Leviticus,
        title_pl: "Kpł",
        title_en: "Leviticus",
        polish: &["Kpł", "Kapłańska"],
        english: &["Lev", "Lv", "Leviticus"],
        chapters: &[
            17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24, 33,
            44, 23, 55, 46, 34,
        ],
    },
    BookData {
        id: BookId::Numbers,
        title_pl: "Lb",
        title_en: "Numbers",
        polish: &["Lb", "Liczb"],
        english: &["Num", "Nm", "Numbers"],
        chapters: &[
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35,
            41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13,
        ],
    },
    BookData {
        id: BookId::Deuteronomy,
        title_pl: "Pwt",
        title_en: "Deuteronomy",
        polish: &["Pwt", "Powtórzonego Prawa"],
        english: &["Deut", "Dt", "Deuteronomy"],
        chapters: &[
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23,
            30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12,
        ],
    },
    BookData {
        id: BookId::Joshua,
        title_pl: "Joz",
        title_en: "Joshua",
        polish: &["Joz", "Jozuego"],
        english: &["Josh", "Jos", "Joshua"],
        chapters: &[
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45, 34,
            16, 33,
        ],
    },
    BookData {
        id: BookId::Judges,
        title_pl: "Sdz",
        title_en: "Judges",
        polish: &["Sdz", "Sędz", "Sędziów"],
        english: &["Judg", "Jdg", "Judges"],
        chapters: &[
            36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25,
        ],
    },
    BookData {
        id: BookId::Ruth,
        title_pl: "Rt",
        title_en: "Ruth",
        polish: &["Rt", "Rut"],
        english: &["Ruth"],
        chapters: &[22, 23, 18, 22],
    },
    BookData {
        id: BookId::Samuel1,
        title_pl: "1 Sm",
        title_en: "1 Samuel",
        polish: &["1 Sm", "1 Samuela"],
        english: &["1 Sam", "1 Sa", "1 Samuel"],
        chapters: &[
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15,
            23, 29, 22, 44, 25, 12, 25, 11, 31, 13,
        ],
    },
    BookData {
        id: BookId::Samuel2,
        title_pl: "2 Sm",
        title_en: "2 Samuel",
        polish: &["2 Sm", "2 Samuela"],
        english: &["2 Sam", "2 Sa", "2 Samuel"],
        chapters: &[
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22,
            51, 39, 25,
        ],
    },
    BookData {
        id: BookId::Kings1,
        title_pl: "1 Krl",
        title_en: "1 Kings",
        polish: &["1 Krl", "1 Kro", "1 Królewska"],
        english: &["1 Kgs", "1 Ki", "1 Kings"],
        chapters: &[
            53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29,
            53,
        ],
    },
    BookData {
        id: BookId::Kings2,
        title_pl: "2 Krl",
        title_en: "2 Kings",
        polish: &["2 Krl", "2 Kro", "2 Królewska"],
        english: &["2 Kgs", "2 Ki", "2 Kings"],
        chapters: &[
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26,
            20, 37, 20, 30,
        ],
    },
    BookData {
        id: BookId::Chronicles1,
        title_pl: "1 Krn",
        title_en: "1 Chronicles",
        polish: &["1 Krn", "1 Kron", "1 Kronik"],
        english: &["1 Chr", "1 Ch", "1 Chronicles"],
        chapters: &[
            54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30, 19,
            32, 31, 31, 32, 34, 21, 30,
        ],
    },
    BookData {
        id: BookId::Chronicles2,
        title_pl: "2 Krn",
        title_en: "2 Chronicles",
        polish: &["2 Krn", "2 Kron", "2 Kronik"],
        english: &["2 Chr", "2 Ch", "2 Chronicles"],
        chapters: &[
            17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20,
            12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
        ],
    },
    BookData {
        id: BookId::Ezra,
        title_pl: "Ezd",
        title_en: "Ezra",
        polish: &["Ezd", "Ezdrasza"],
        english: &["Ezra", "Ezr"],
        chapters: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
    },
    BookData {
        id: BookId::Nehemiah,
        title_pl: "Ne",
        title_en: "Nehemiah",
        polish: &["Ne", "Neh", "Nehemiasza"],
        english: &["Neh", "Nehemiah"],
        chapters: &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31],
    },
    BookData {
        id: BookId::Esther,
        title_pl: "Est",
        title_en: "Esther",
        polish: &["Est", "Estery"],
        english: &["Est", "Esth", "Esther"],
        chapters: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
    },
    BookData {
        id: BookId::Job,
        title_pl: "Hi",
        title_en: "Job",
        polish: &["Hi", "Hiob", "Hioba"],
        english: &["Job", "Jb"],
        chapters: &[
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34,
            30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
        ],
    },
    BookData {
        id: BookId::Psalms,
        title_pl: "Ps",
        title_en: "Psalms",
        polish: &["Ps", "Psalm", "Psalmy"],
        english: &["Ps", "Psa", "Pslm", "Psalm", "Psalms"],
        chapters: &[
            6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6, 10,
            22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26, 17, 11,
            9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20, 7, 35, 36,
            5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18, 52, 17, 16,
            15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7, 10, 10, 9, 8,
            18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21, 26, 9, 8, 24,
            13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6,
        ],
    },
    BookData {
        id: BookId::Proverbs,
        title_pl: "Prz",
        title_en: "Proverbs",
        polish: &["Prz", "Przyp", "Pr", "Przysłów"],
        english: &["Prov", "Prv", "Proverbs"],
        chapters: &[
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31,
            29, 35, 34, 28, 28, 27, 28, 27, 33, 31,
        ],
    },
    BookData {
        id: BookId::Ecclesiastes,
        title_pl: "Koh",
        title_en: "Ecclesiastes",
        polish: &["Koh", "Kohelet", "Koheleta"],
        english: &["Eccl", "Ecc", "Qoh", "Ecclesiastes"],
        chapters: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
    },
    BookData {
        id: BookId::SongOfSongs,
        title_pl: "Pnp",
        title_en: "Song of Songs",
        polish: &["Pnp", "Pns", "Pieśń"],
        english: &["Song", "SoS", "Sg", "Song of Songs"],
        chapters: &[17, 17, 11, 16, 16, 13, 13, 14],
    },
    BookData {
        id: BookId::Isaiah,
        title_pl: "Iz",
        title_en: "Isaiah",
        polish: &["Iz", "Izajasza"],
        english: &["Isa", "Is", "Isaiah"],
        chapters: &[
            31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25, 18,
            23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28, 28, 25,
            13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12, 25, 24,
        ],
    },
    BookData {
        id: BookId::Jeremiah,
        title_pl: "Jr",
        title_en: "Jeremiah",
        polish: &["Jr", "Jer", "Jeremiasza"],
        english: &["Jer", "Jeremiah"],
        chapters: &[
            19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14,
            30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22,
            13, 30, 5, 28, 7, 47, 39, 46, 64, 34,
        ],
    },
    BookData {
        id: BookId::Lamentations,
        title_pl: "Lm",
        title_en: "Lamentations",
        polish: &["Lm", "Lamentacje", "Tren", "Treny"],
        english: &["Lam", "Lamentations"],
        chapters: &[22, 22, 66, 22, 22],
    },
    BookData {
        id: BookId::Ezekiel,
        title_pl: "Ez",
        title_en: "Ezekiel",
        polish: &["Ez", "Ezechiela"],
        english: &["Ezek", "Ezk", "Eze", "Ezekiel"],
        chapters: &[
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32, 31,
            49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20, 27,
            31, 25, 24, 23, 35,
        ],
    },
    BookData {
        id: BookId::Daniel,
        title_pl: "Dn",
        title_en: "Daniel",
        polish: &["Dn", "Dan", "Daniela"],
        english: &["Dan", "Dn", "Daniel"],
        chapters: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
    },
    BookData {
        id: BookId::Hosea,
        title_pl: "Oz",
        title_en: "Hosea",
        polish: &["Oz", "Ozeasza"],
        english: &["Hos", "Hosea"],
        chapters: &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9],
    },
    BookData {
        id: BookId::Joel,
        title_pl: "Jl",
        title_en: "Joel",
        polish: &["Jl", "Joela"],
        english: &["Joel", "Jl"],
        chapters: &[20, 32, 21],
    },
    BookData {
        id: BookId::Amos,
        title_pl: "Am",
        title_en: "Amos",
        polish: &["Am", "Amosa"],
        english: &["Amos", "Am"],
        chapters: &[15, 16, 15, 13, 27, 14, 17, 14, 15],
    },
    BookData {
        id: BookId::Obadiah,
        title_pl: "Ab",
        title_en: "Obadiah",
        polish: &["Ab", "Abd", "Abdiasza"],
        english: &["Obad", "Ob", "Obadiah"],
        chapters: &[21],
    },
    BookData {
        id: BookId::Jonah,
        title_pl: "Jon",
        title_en: "Jonah",
        polish: &["Jon", "Jonasza"],
        english: &["Jonah", "Jon", "Jnh"],
        chapters: &[17, 10, 10, 11],
    },
    BookData {
        id: BookId::Micah,
        title_pl: "Mi",
        title_en: "Micah",
        polish: &["Mi", "Micheasza"],
        english: &["Mic", "Micah"],
        chapters: &[16, 13, 12, 13, 15, 16, 20],
    },
    BookData {
        id: BookId::Nahum,
        title_pl: "Na",
        title_en: "Nahum",
        polish: &["Na", "Nahuma"],
        english: &["Nah", "Nahum"],
        chapters: &[15, 13, 19],
    },
    BookData {
        id: BookId::Habakkuk,
        title_pl: "Ha",
        title_en: "Habakkuk",
        polish: &["Ha", "Habakuka"],
        english: &["Hab", "Habakkuk"],
        chapters: &[17, 20, 19],
    },
    BookData {
        id: BookId::Zephaniah,
        title_pl: "So",
        title_en: "Zephaniah",
        polish: &["So", "Sop", "Sofoniasza"],
        english: &["Zeph", "Zep", "Zephaniah"],
        chapters: &[18, 15, 20],
    },
    BookData {
        id: BookId::Haggai,
        title_pl: "Ag",
        title_en: "Haggai",
        polish: &["Ag", "Aggeusza"],
        english: &["Hag", "Hg", "Haggai"],
        chapters: &[15, 23],
    },
    BookData {
        id: BookId::Zechariah,
        title_pl: "Za",
        title_en: "Zechariah",
        polish: &["Za", "Zach", "Zachariasza"],
        english: &["Zech", "Zec", "Zechariah"],
        chapters: &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21],
    },
    BookData {
        id: BookId::Malachi,
        title_pl: "Ml",
        title_en: "Malachi",
        polish: &["Ml", "Malachiasza"],
        english: &["Mal", "Malachi"],
        chapters: &[14, 17, 18, 6],
    },
    BookData {
        id: BookId::Matthew,
        title_pl: "Mt",
        title_en: "Matthew",
        polish: &["Mt", "Mat", "Mateusza"],
        english: &["Matt", "Mt", "Mat", "Matthew"],
        chapters: &[
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46,
            46, 39, 51, 46, 75, 66, 20,
        ],
    },
    BookData {
        id: BookId::Mark,
        title_pl: "Mk",
        title_en: "Mark",
        polish: &["Mk", "Marka"],
        english: &["Mark", "Mk", "Mrk"],
        chapters: &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20],
    },
    BookData {
        id: BookId::Luke,
        title_pl: "Łk",
        title_en: "Luke",
        polish: &["Łk", "Łukasza"],
        english: &["Luke", "Lk", "Luk"],
        chapters: &[
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38,
            71, 56, 53,
        ],
    },
    BookData {
        id: BookId::John,
        title_pl: "J",
        title_en: "John",
        polish: &["J", "Jan", "Jana"],
        english: &["John", "Jn", "Jhn"],
        chapters: &[
            51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25,
        ],
    },
    BookData {
        id: BookId::Acts,
        title_pl: "Dz",
        title_en: "Acts",
        polish: &["Dz", "Dzap", "Dap", "Dzieje"],
        english: &["Acts", "Ac"],
        chapters: &[
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40,
            30, 35, 27, 27, 32, 44, 31,
        ],
    },
    BookData {
        id: BookId::Romans,
        title_pl: "Rz",
        title_en: "Romans",
        polish: &["Rz", "Rzymian"],
        english: &["Rom", "Ro", "Romans"],
        chapters: &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27],
    },
    BookData {
        id: BookId::Corinthians1,
        title_pl: "1 Kor",
        title_en: "1 Corinthians",
        polish: &["1 Kor", "1 Koryntian"],
        english: &["1 Cor", "1 Co", "1 Corinthians"],
        chapters: &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24],
    },
    BookData {
        id: BookId::Corinthians2,
        title_pl: "2 Kor",
        title_en: "2 Corinthians",
        polish: &["2 Kor", "2 Koryntian"],
        english: &["2 Cor", "2 Co", "2 Corinthians"],
        chapters: &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14],
    },
    BookData {
        id: BookId::Galatians,
        title_pl: "Ga",
        title_en: "Galatians",
        polish: &["Ga", "Gal", "Galatów"],
        english: &["Gal", "Galatians"],
        chapters: &[24, 21, 29, 31, 26, 18],
    },
    BookData {
        id: BookId::Ephesians,
        title_pl: "Ef",
        title_en: "Ephesians",
        polish: &["Ef", "Efezjan"],
        english: &["Eph", "Ephesians"],
        chapters: &[23, 22, 21, 32, 33, 24],
    },
    BookData {
        id: BookId::Philippians,
        title_pl: "Flp",
        title_en: "Philippians",
        polish: &["Flp", "Filipian"],
        english: &["Phil", "Php", "Philippians"],
        chapters: &[30, 30, 21, 23],
    },
    BookData {
        id: BookId::Colossians,
        title_pl: "Kol",
        title_en: "Colossians",
        polish: &["Kol", "Kolosan"],
        english: &["Col", "Colossians"],
        chapters: &[29, 23, 25, 18],
    },
    BookData {
        id: BookId::Thessalonians1,
        title_pl: "1 Tes",
        title_en: "1 Thessalonians",
        polish: &["1 Tes", "1 Tesal", "1 Tesaloniczan"],
        english: &["1 Thess", "1 Th", "1 Thessalonians"],
        chapters: &[10, 20, 13, 18, 28],
    },
    BookData {
        id: BookId::Thessalonians2,
        title_pl: "2 Tes",
        title_en: "2 Thessalonians",
        polish: &["2 Tes", "2 Tesal", "2 Tesaloniczan"],
        english: &["2 Thess", "2 Th", "2 Thessalonians"],
        chapters: &[12, 17, 18],
    },
    BookData {
        id: BookId::Timothy1,
        title_pl: "1 Tm",
        title_en: "1 Timothy",
        polish: &["1 Tm", "1 Tym", "1 Tymoteusza"],
        english: &["1 Tim", "1 Ti", "1 Timothy"],
        chapters: &[20, 15, 16, 16, 25, 21],
    },
    BookData {
        id: BookId::Timothy2,
        title_pl: "2 Tm",
        title_en: "2 Timothy",
        polish: &["2 Tm", "2 Tym", "2 Tymoteusza"],
        english: &["2 Tim", "2 Ti", "2 Timothy"],
        chapters: &[18, 26, 17, 22],
    },
    BookData {
        id: BookId::Titus,
        title_pl: "Tt",
        title_en: "Titus",
        polish: &["Tt", "Tyt", "Tytusa"],
        english: &["Tit", "Titus"],
        chapters: &[16, 15, 15],
    },
    BookData {
        id: BookId::Philemon,
        title_pl: "Flm",
        title_en: "Philemon",
        polish: &["Flm", "Filemona"],
        english: &["Phlm", "Phm", "Philem", "Philemon"],
        chapters: &[25],
    },
    BookData {
        id: BookId::Hebrews,
        title_pl: "Hbr",
        title_en: "Hebrews",
        polish: &["Hbr", "Hebrajczyków"],
        english: &["Heb", "Hebrews"],
        chapters: &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25],
    },
    BookData {
        id: BookId::James,
        title_pl: "Jk",
        title_en: "James",
        polish: &["Jk", "Jak", "Jakuba"],
        english: &["Jas", "Jm", "James"],
        chapters: &[27, 26, 18, 17, 20],
    },
    BookData {
        id: BookId::Peter1,
        title_pl: "1 P",
        title_en: "1 Peter",
        polish: &["1 P", "1 Pi", "1 Ptr", "1 Piotra"],
        english: &["1 Pet", "1 Pt", "1 Peter"],
        chapters: &[25, 25, 22, 19, 14],
    },
    BookData {
        id: BookId::Peter2,
        title_pl: "2 P",
        title_en: "2 Peter",
        polish: &["2 P", "2 Pi", "2 Ptr", "2 Piotra"],
        english: &["2 Pet", "2 Pt", "2 Peter"],
        chapters: &[21, 22, 18],
    },
    BookData {
        id: BookId::John1,
        title_pl: "1 J",
        title_en: "1 John",
        polish: &["1 J", "1 Jan", "1 Jana"],
        english: &["1 Jn", "1 Jo", "1 John"],
        chapters: &[10, 29, 24, 21, 21],
    },
    BookData {
        id: BookId::John2,
        title_pl: "2 J",
        title_en: "2 John",
        polish: &["2 J", "2 Jan", "2 Jana"],
        english: &["2 Jn", "2 Jo", "2 John"],
        chapters: &[13],
    },
    BookData {
        id: BookId::John3,
        title_pl: "3 J",
        title_en: "3 John",
        polish: &["3 J", "3 Jan", "3 Jana"],
        english: &["3 Jn", "3 Jo", "3 John"],
        chapters: &[14],
    },
    BookData {
        id: BookId::Jude,
        title_pl: "Jud",
        title_en: "Jude",
        polish: &["Jud", "Judy"],
        english: &["Jude", "Jd"],
        chapters: &[25],
    },
    BookData {
        id: BookId::Revelation,
        title_pl: "Ap",
        title_en: "Revelation",
        polish: &["Ap", "Apk", "Obj", "Objaw", "Apokalipsa", "Objawienie"],
        english: &["Rev", "Rv", "Revelation"],
        chapters: &[
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 17, 18, 20, 8, 21, 18, 24, 21, 15, 27, 21,
        ],
    },
    BookData {
        id: BookId::Tobit,
        title_pl: "Tb",
        title_en: "Tobit",
        polish: &["Tb", "Tob", "Tobiasza"],
        english: &["Tob", "Tobit"],
        chapters: &[22, 14, 17, 21, 22, 17, 18, 21, 6, 12, 19, 22, 18, 15],
    },
    BookData {
        id: BookId::Wisdom,
        title_pl: "Mdr",
        title_en: "Wisdom",
        polish: &["Mdr", "Mądrości"],
        english: &["Wis", "Wisd", "Wisdom"],
        chapters: &[
            16, 24, 19, 20, 23, 25, 30, 21, 18, 21, 26, 27, 19, 31, 19, 29, 21, 25, 22,
        ],
    },
    BookData {
        id: BookId::Sirach,
        title_pl: "Syr",
        title_en: "Sirach",
        polish: &["Syr", "Syracha"],
        english: &["Sir", "Sirach", "Ecclus"],
        chapters: &[
            30, 18, 31, 31, 15, 37, 36, 19, 18, 31, 34, 18, 26, 27, 20, 30, 32, 33, 30, 32, 28,
            27, 28, 34, 26, 29, 30, 26, 28, 25, 31, 24, 31, 26, 20, 26, 31, 34, 35, 30, 24, 25,
            33, 23, 26, 20, 25, 25, 16, 29, 30,
        ],
    },
    BookData {
        id: BookId::Maccabees1,
        title_pl: "1 Mch",
        title_en: "1 Maccabees",
        polish: &["1 Mch", "1 Machabejska"],
        english: &["1 Macc", "1 Mac", "1 Maccabees"],
        chapters: &[64, 70, 60, 61, 68, 63, 50, 32, 73, 89, 74, 53, 53, 49, 41, 24],
    },
    BookData {
        id: BookId::Maccabees2,
        title_pl: "2 Mch",
        title_en: "2 Maccabees",
        polish: &["2 Mch", "2 Machabejska"],
        english: &["2 Macc", "2 Mac", "2 Maccabees"],
        chapters: &[36, 32, 40, 50, 27, 31, 42, 36, 29, 38, 38, 45, 26, 46, 39],
    },
];
