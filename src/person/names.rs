//! 姓名池 - 按性别区分的罗马尼亚常用名

use rand::Rng;

/// 女性名池
pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Adelina", "Adina", "Ana", "Andra", "Aurora", "Bianca", "Camelia", "Carina", "Crina",
    "Carmen", "Cristina", "Claudia", "Daria", "Diana", "Daniela", "Elena", "Eliza", "Ema",
    "Emilia", "Gabriela", "Georgiana", "Gina", "Ioana", "Iulia", "Izabela", "Iris", "Laura",
    "Lavinia", "Larisa", "Lidia", "Luiza", "Madalina", "Mara", "Maria", "Melania", "Mihaela",
    "Mirela", "Monica", "Mariana", "Marina", "Nadia", "Nicoleta", "Nina", "Oana", "Otilia",
    "Olivia", "Paula", "Raluca", "Ramona", "Rodica", "Roxana", "Ruxandra", "Sabina", "Silvia",
    "Stefania", "Teodora", "Valentina", "Violeta", "Tamara", "Zoe",
];

/// 男性名池
pub const MALE_FIRST_NAMES: &[&str] = &[
    "Adelin", "Anton", "Alexandru", "Andrei", "Bogdan", "Adrian", "Catalin", "Cristian",
    "Cosmin", "Costin", "Daniel", "Claudiu", "Daniel", "David", "Dragos", "Eduard", "Emilian",
    "Emanuel", "Florin", "Felix", "Gabriel", "George", "Iulian", "Ivan", "Laurentiu", "Liviu",
    "Lucian", "Madalin", "Marius", "Octavian", "Ovidiu", "Paul", "Pavel", "Raul", "Robert",
    "Dorin", "Sabin", "Sebastian", "Stefan", "Sorin", "Teodor", "Valentin", "Victor", "Vlad",
    "Cezar", "Doru", "Flaviu", "Eugen", "Grigore", "Horatiu", "Horia", "Iacob", "Iustin",
    "Leonard", "Marcel", "Nelu", "Rares", "Serban", "Sergiu", "Tudor",
];

/// 姓氏池
pub const LAST_NAMES: &[&str] = &[
    "Abaza", "Adamescu", "Adoc", "Albu", "Baciu", "Badea", "Barbu", "Candea", "Caragiu",
    "Cernea", "Chitu", "Conea", "Danciu", "Deac", "Diaconu", "Doinas", "Enache", "Ene",
    "Erbiceanu", "Filimon", "Florea", "Frosin", "Fulga", "Ganea", "Georgescu", "Ghinea",
    "Goga", "Hasdeu", "Herlea", "Hoban", "Iacobescu", "Ionescu", "Irimia", "Josan", "Kiazim",
    "Lambru", "Lascu", "Lipa", "Lucan", "Lungu", "Lupu", "Manea", "Manolescu", "Marinescu",
    "Mugur", "Neagu", "Nechita", "Negrescu", "Nita", "Oancea", "Olaru", "Onciu", "Pascu",
    "Parvu", "Radulescu", "Nelu", "Rares", "Stan", "Tamas", "Tudoran",
];

/// 随机拼出"名 名 姓"三段式全名
///
/// 两个名独立抽取，允许重复。池中的重复条目按原样保留，
/// 抽中概率随条目数走。
pub fn full_name(rng: &mut impl Rng, male: bool) -> String {
    let pool = if male {
        MALE_FIRST_NAMES
    } else {
        FEMALE_FIRST_NAMES
    };
    let first1 = pool[rng.gen_range(0..pool.len())];
    let first2 = pool[rng.gen_range(0..pool.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{first1} {first2} {last}")
}
