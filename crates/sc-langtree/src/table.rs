//! The language table: families, subfamilies, languages and a handful of
//! common words per language.

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Build a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// A language and its most common words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Language name.
    pub name: &'static str,
    /// Common words, in table order.
    pub words: &'static [&'static str],
}

/// A branch of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subfamily {
    /// Subfamily name.
    pub name: &'static str,
    /// Member languages.
    pub languages: &'static [Language],
}

/// A top-level language family with its display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Family {
    /// Family name.
    pub name: &'static str,
    /// Colour used for every branch of this family.
    pub color: Rgb,
    /// Subfamilies, in table order.
    pub subfamilies: &'static [Subfamily],
}

impl Family {
    /// Number of languages across all subfamilies.
    pub fn language_count(&self) -> usize {
        self.subfamilies.iter().map(|s| s.languages.len()).sum()
    }

    /// Number of words across all languages.
    pub fn word_count(&self) -> usize {
        self.subfamilies
            .iter()
            .flat_map(|s| s.languages)
            .map(|l| l.words.len())
            .sum()
    }
}

/// Total number of languages in `table`.
pub fn count_languages(table: &[Family]) -> usize {
    table.iter().map(Family::language_count).sum()
}

/// Total number of words in `table`.
pub fn count_words(table: &[Family]) -> usize {
    table.iter().map(Family::word_count).sum()
}

const fn lang(name: &'static str, words: &'static [&'static str]) -> Language {
    Language { name, words }
}

/// The language table: 11 families, their subfamilies, languages and common words.
pub static LANGUAGES: &[Family] = &[
    Family {
        name: "Indo-European",
        color: Rgb::new(0xFF, 0x6B, 0x6B),
        subfamilies: &[
            Subfamily {
                name: "Germanic",
                languages: &[
                    lang("English", &["the", "be", "to", "of", "and"]),
                    lang("German", &["der", "die", "und", "in", "den"]),
                    lang("Dutch", &["de", "het", "een", "van", "en"]),
                    lang("Swedish", &["och", "i", "att", "det", "som"]),
                    lang("Norwegian", &["og", "i", "det", "av", "en"]),
                    lang("Danish", &["og", "i", "at", "en", "det"]),
                    lang("Icelandic", &["og", "í", "að", "er", "sem"]),
                ],
            },
            Subfamily {
                name: "Slavic",
                languages: &[
                    lang("Russian", &["в", "и", "не", "на", "я"]),
                    lang("Polish", &["w", "na", "i", "się", "z"]),
                    lang("Ukrainian", &["в", "і", "на", "не", "що"]),
                    lang("Czech", &["a", "v", "se", "na", "že"]),
                    lang("Serbian", &["и", "у", "се", "на", "је"]),
                    lang("Bulgarian", &["и", "на", "в", "да", "с"]),
                    lang("Croatian", &["i", "u", "se", "na", "je"]),
                ],
            },
            Subfamily {
                name: "Romance",
                languages: &[
                    lang("Spanish", &["el", "de", "que", "y", "la"]),
                    lang("French", &["le", "de", "un", "être", "et"]),
                    lang("Italian", &["il", "di", "e", "la", "a"]),
                    lang("Portuguese", &["o", "de", "que", "e", "a"]),
                    lang("Romanian", &["și", "de", "la", "a", "în"]),
                    lang("Catalan", &["el", "de", "i", "la", "a"]),
                ],
            },
            Subfamily {
                name: "Iranian",
                languages: &[
                    lang("Persian", &["را", "در", "به", "از", "که"]),
                    lang("Kurdish", &["û", "li", "di", "de", "ji"]),
                    lang("Pashto", &["او", "په", "دی", "له", "چې"]),
                    lang("Tajik", &["ва", "дар", "аз", "ба", "ин"]),
                    lang("Ossetian", &["æмæ", "у", "ын", "та", "цы"]),
                ],
            },
            Subfamily {
                name: "Indic",
                languages: &[
                    lang("Hindi", &["है", "का", "की", "में", "को"]),
                    lang("Bengali", &["এ", "ও", "না", "কি", "হয়"]),
                    lang("Punjabi", &["ਦੇ", "ਨੂੰ", "ਹੈ", "ਤੇ", "ਦਾ"]),
                    lang("Marathi", &["आहे", "या", "ते", "त्या", "ही"]),
                    lang("Gujarati", &["છે", "ના", "તે", "એ", "માટે"]),
                    lang("Urdu", &["ہے", "کا", "کی", "میں", "کو"]),
                    lang("Nepali", &["छ", "को", "मा", "र", "छन्"]),
                    lang("Sinhala", &["ය", "ට", "හා", "එ", "වේ"]),
                ],
            },
            Subfamily {
                name: "Greek",
                languages: &[
                    lang("Greek", &["ο", "η", "το", "και", "να"]),
                    lang("Cypriot", &["ο", "τα", "που", "και", "για"]),
                ],
            },
            Subfamily {
                name: "Celtic",
                languages: &[
                    lang("Irish", &["an", "is", "ar", "le", "ag"]),
                    lang("Welsh", &["y", "yn", "a", "i", "o"]),
                    lang("Scottish", &["an", "a", "is", "aig", "air"]),
                ],
            },
            Subfamily {
                name: "Baltic",
                languages: &[
                    lang("Lithuanian", &["ir", "kad", "o", "yra", "į"]),
                    lang("Latvian", &["un", "ir", "ka", "uz", "ar"]),
                ],
            },
        ],
    },
    Family {
        name: "Sino-Tibetan",
        color: Rgb::new(0x4E, 0xCD, 0xC4),
        subfamilies: &[
            Subfamily {
                name: "Sinitic",
                languages: &[
                    lang("Mandarin", &["的", "一", "是", "在", "不"]),
                    lang("Cantonese", &["嘅", "咗", "啲", "喺", "係"]),
                    lang("Wu", &["个", "仔", "勿", "来", "哉"]),
                    lang("Min", &["个", "是", "伊", "啥", "无"]),
                    lang("Hakka", &["个", "係", "毋", "佢", "哩"]),
                ],
            },
            Subfamily {
                name: "Tibeto-Burman",
                languages: &[
                    lang("Burmese", &["က", "ကို", "မှာ", "နဲ့", "တွေ"]),
                    lang("Tibetan", &["པ", "ལ", "གི", "ང", "བ"]),
                    lang("Karen", &["ကီၢ်", "န", "တၢ်", "လၢ", "ယ"]),
                ],
            },
        ],
    },
    Family {
        name: "Afro-Asiatic",
        color: Rgb::new(0xFF, 0xE6, 0x6D),
        subfamilies: &[
            Subfamily {
                name: "Semitic",
                languages: &[
                    lang("Arabic", &["في", "من", "على", "إلى", "أن"]),
                    lang("Hebrew", &["את", "של", "על", "לא", "זה"]),
                    lang("Amharic", &["እና", "ነው", "ይህ", "በ", "ለ"]),
                    lang("Tigrinya", &["ን", "እዩ", "ኣብ", "ከም", "ብ"]),
                    lang("Maltese", &["li", "u", "ta'", "f'", "dan"]),
                ],
            },
            Subfamily {
                name: "Cushitic",
                languages: &[
                    lang("Somali", &["iyo", "oo", "ah", "ku", "waa"]),
                    lang("Oromo", &["fi", "kan", "kana", "ta'uu", "akka"]),
                ],
            },
            Subfamily {
                name: "Chadic",
                languages: &[
                    lang("Hausa", &["da", "a", "ba", "ya", "na"]),
                ],
            },
        ],
    },
    Family {
        name: "Austronesian",
        color: Rgb::new(0x95, 0xE1, 0xD3),
        subfamilies: &[
            Subfamily {
                name: "Malayo-Polynesian",
                languages: &[
                    lang("Indonesian", &["yang", "dan", "di", "ini", "untuk"]),
                    lang("Malay", &["yang", "dan", "ini", "untuk", "pada"]),
                    lang("Tagalog", &["ang", "ng", "sa", "ay", "na"]),
                    lang("Javanese", &["lan", "karo", "ing", "iku", "kuwi"]),
                    lang("Sundanese", &["jeung", "teh", "di", "ka", "anu"]),
                    lang("Malagasy", &["ny", "amin'ny", "sy", "dia", "fa"]),
                    lang("Hawaiian", &["ka", "i", "o", "a", "ma"]),
                    lang("Samoan", &["o", "le", "i", "e", "a"]),
                    lang("Maori", &["te", "ki", "i", "o", "a"]),
                ],
            },
            Subfamily {
                name: "Philippine",
                languages: &[
                    lang("Cebuano", &["ang", "sa", "ug", "nga", "sa"]),
                    lang("Ilocano", &["ti", "iti", "nga", "ken", "dagiti"]),
                ],
            },
        ],
    },
    Family {
        name: "Niger-Congo",
        color: Rgb::new(0xFF, 0x8C, 0x42),
        subfamilies: &[
            Subfamily {
                name: "Bantu",
                languages: &[
                    lang("Swahili", &["ya", "na", "wa", "ni", "katika"]),
                    lang("Zulu", &["nge", "ku", "nga", "ukuthi", "we"]),
                    lang("Shona", &["ne", "kuti", "zva", "pa", "mu"]),
                    lang("Xhosa", &["nge", "ukuba", "ku", "lo", "e"]),
                    lang("Kikuyu", &["na", "kũ", "wa", "nĩ", "ũrĩa"]),
                ],
            },
            Subfamily {
                name: "Volta-Niger",
                languages: &[
                    lang("Yoruba", &["ni", "ti", "si", "ati", "ko"]),
                    lang("Igbo", &["na", "nke", "bụ", "n'ime", "ka"]),
                ],
            },
        ],
    },
    Family {
        name: "Dravidian",
        color: Rgb::new(0xA8, 0xE6, 0xCF),
        subfamilies: &[
            Subfamily {
                name: "Southern",
                languages: &[
                    lang("Tamil", &["இன்", "ஒரு", "அந்த", "இந்த", "என்று"]),
                    lang("Malayalam", &["ഒരു", "ആണ്", "ഉം", "എന്ന്", "ഇത്"]),
                    lang("Kannada", &["ಒಂದು", "ಈ", "ಆ", "ಅಥವಾ", "ಮತ್ತು"]),
                ],
            },
            Subfamily {
                name: "South-Central",
                languages: &[
                    lang("Telugu", &["ఒక", "కు", "లో", "ను", "తో"]),
                    lang("Gondi", &["ओंदु", "मा", "ने", "त", "का"]),
                ],
            },
        ],
    },
    Family {
        name: "Turkic",
        color: Rgb::new(0xC7, 0x7D, 0xFF),
        subfamilies: &[
            Subfamily {
                name: "Oghuz",
                languages: &[
                    lang("Turkish", &["bir", "bu", "ve", "için", "ile"]),
                    lang("Azerbaijani", &["bir", "və", "bu", "üçün", "ki"]),
                    lang("Turkmen", &["bir", "we", "bu", "üçin", "bilen"]),
                ],
            },
            Subfamily {
                name: "Karluk",
                languages: &[
                    lang("Uzbek", &["va", "bir", "bu", "uchun", "bilan"]),
                    lang("Uyghur", &["بىر", "ۋە", "بۇ", "ئۈچۈن", "دىن"]),
                ],
            },
            Subfamily {
                name: "Kipchak",
                languages: &[
                    lang("Kazakh", &["бір", "және", "бұл", "үшін", "да"]),
                    lang("Kyrgyz", &["бир", "жана", "бул", "үчүн", "менен"]),
                    lang("Tatar", &["бер", "һәм", "бу", "өчен", "белән"]),
                ],
            },
        ],
    },
    Family {
        name: "Japonic",
        color: Rgb::new(0xFF, 0x85, 0xC0),
        subfamilies: &[
            Subfamily {
                name: "Japanese",
                languages: &[
                    lang("Japanese", &["の", "に", "は", "を", "た"]),
                    lang("Ryukyuan", &["ぬ", "が", "や", "ん", "し"]),
                ],
            },
        ],
    },
    Family {
        name: "Koreanic",
        color: Rgb::new(0x8D, 0xD9, 0xCC),
        subfamilies: &[
            Subfamily {
                name: "Korean",
                languages: &[
                    lang("Korean", &["이", "가", "을", "는", "에"]),
                ],
            },
        ],
    },
    Family {
        name: "Austroasiatic",
        color: Rgb::new(0xFF, 0xA3, 0xB5),
        subfamilies: &[
            Subfamily {
                name: "Mon-Khmer",
                languages: &[
                    lang("Khmer", &["នៃ", "ក្នុង", "និង", "ដែល", "នេះ"]),
                    lang("Vietnamese", &["và", "của", "có", "là", "này"]),
                    lang("Mon", &["ကဵု", "ဂှ်", "တအ်", "မ္ဂး", "ပိုဲ"]),
                ],
            },
        ],
    },
    Family {
        name: "Uralic",
        color: Rgb::new(0x96, 0xCE, 0xB4),
        subfamilies: &[
            Subfamily {
                name: "Finnic",
                languages: &[
                    lang("Finnish", &["ja", "on", "ei", "se", "oli"]),
                    lang("Estonian", &["ja", "on", "see", "ei", "ka"]),
                ],
            },
            Subfamily {
                name: "Ugric",
                languages: &[
                    lang("Hungarian", &["a", "az", "és", "hogy", "van"]),
                ],
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn table_size() {
        assert_eq!(LANGUAGES.len(), 11);
        assert_eq!(count_languages(LANGUAGES), 96);
        assert_eq!(count_words(LANGUAGES), 480);
    }

    #[test]
    fn every_language_has_five_words() {
        for family in LANGUAGES {
            for sub in family.subfamilies {
                for lang in sub.languages {
                    assert_eq!(lang.words.len(), 5, "{}", lang.name);
                }
            }
        }
    }

    #[test]
    fn every_level_is_non_empty() {
        for family in LANGUAGES {
            assert!(!family.subfamilies.is_empty(), "{}", family.name);
            for sub in family.subfamilies {
                assert!(!sub.languages.is_empty(), "{}", sub.name);
            }
        }
    }

    #[test]
    fn family_names_and_colours_are_distinct() {
        let names: HashSet<_> = LANGUAGES.iter().map(|f| f.name).collect();
        let colors: HashSet<_> = LANGUAGES.iter().map(|f| f.color).collect();
        assert_eq!(names.len(), LANGUAGES.len());
        assert_eq!(colors.len(), LANGUAGES.len());
    }

    #[test]
    fn family_counts() {
        let ie = &LANGUAGES[0];
        assert_eq!(ie.name, "Indo-European");
        assert_eq!(ie.color, Rgb::new(0xFF, 0x6B, 0x6B));
        assert_eq!(ie.language_count(), 40);
        assert_eq!(ie.word_count(), 200);
    }

    #[test]
    fn empty_table_counts() {
        assert_eq!(count_languages(&[]), 0);
        assert_eq!(count_words(&[]), 0);
    }
}
