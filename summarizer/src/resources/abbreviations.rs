//! Abbreviations that end in a period without ending a sentence.
//!
//! Entries are lowercase and stored without the trailing period. Dotted
//! forms like "e.g" match the whole token before the final period.

use crate::language::Language;

/// Abbreviations shared by every language (Latin and technical forms).
const COMMON: &[&str] = &[
    "e.g", "i.e", "etc", "vs", "cf", "ca", "approx", "vol", "pp", "fig", "figs", "eds", "ibid",
    "km", "cm", "mm", "kg",
];

const ENGLISH: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "rev", "hon", "gen", "col",
    "lt", "capt", "cmdr", "sgt", "maj", "adm", "gov", "sen", "rep", "pres", "supt", "insp",
    "messrs", "mme", "esq", "inc", "ltd", "co", "corp", "bros", "dept", "univ", "assn", "est",
    "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    "tue", "tues", "thu", "thur", "thurs", "fri", "ave", "blvd",
    "rd", "hwy", "apt", "u.s", "u.k", "u.n", "a.m", "p.m", "ph.d", "b.a", "m.a", "d.c",
];

const GERMAN: &[&str] = &[
    "hr", "hrn", "fr", "frl", "dr", "prof", "dipl", "ing", "bzw", "z.b", "d.h", "u.a", "usw",
    "ggf", "vgl", "evtl", "bspw", "ca", "inkl", "exkl", "zzgl", "abs", "nr", "str", "tel",
    "jh", "jhd", "mio", "mrd", "bzgl", "insb", "sog", "u.u", "z.t", "o.ä", "s.o", "s.u",
    "jan", "feb", "mär", "apr", "jun", "jul", "aug", "sep", "sept", "okt", "nov", "dez",
    "gmbh", "ag", "e.v", "v.chr", "n.chr", "dt", "engl", "franz", "lat",
];

const FRENCH: &[&str] = &[
    "m", "mm", "mme", "mmes", "mlle", "mlles", "dr", "pr", "me", "mgr", "st", "ste", "av",
    "bd", "env", "etc", "p.ex", "c.-à-d", "cf", "janv", "févr", "avr", "juil", "sept",
    "oct", "nov", "déc", "hab", "chap", "art", "éd", "t",
];

const SPANISH: &[&str] = &[
    "sr", "sra", "srta", "sres", "dr", "dra", "lic", "ing", "arq", "prof", "d", "dña", "ud",
    "uds", "vd", "vds", "av", "avda", "c", "pág", "págs", "núm", "tel", "ej", "p.ej", "aprox",
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    "cía", "s.a", "etc", "a.c", "d.c",
];

const ITALIAN: &[&str] = &[
    "sig", "sigg", "sig.ra", "sig.na", "dott", "dott.ssa", "prof", "prof.ssa", "ing", "avv",
    "arch", "geom", "rag", "on", "sen", "mons", "p.es", "ecc", "pag", "pagg", "tel", "n",
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
    "s.p.a", "s.r.l", "a.c", "d.c",
];

const PORTUGUESE: &[&str] = &[
    "sr", "sra", "srs", "sras", "dr", "dra", "prof", "profa", "eng", "arq", "exmo", "exma",
    "v.exa", "av", "r", "pág", "págs", "n", "núm", "tel", "p.ex", "aprox", "etc", "séc",
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
    "ltda", "s.a", "a.c", "d.c",
];

const CZECH: &[&str] = &[
    "např", "tj", "tzv", "tzn", "atd", "apod", "aj", "resp", "popř", "př", "mj", "str",
    "č", "čp", "tel", "ul", "nám", "mudr", "judr", "phdr", "rndr", "ing", "mgr", "bc",
    "doc", "prof", "dr", "p", "pí", "sl", "st", "stol", "r", "kč", "mil", "mld", "min",
    "hod", "tis", "s.r.o", "a.s", "př.n.l", "n.l",
];

/// Abbreviations for a language, including the shared set.
pub fn for_language(language: Language) -> impl Iterator<Item = &'static str> {
    let specific = match language {
        Language::English => ENGLISH,
        Language::German => GERMAN,
        Language::French => FRENCH,
        Language::Spanish => SPANISH,
        Language::Italian => ITALIAN,
        Language::Portuguese => PORTUGUESE,
        Language::Czech => CZECH,
    };
    COMMON.iter().chain(specific.iter()).copied()
}

/// Abbreviations used when a language has no bundle of its own.
pub fn fallback() -> impl Iterator<Item = &'static str> {
    COMMON.iter().copied()
}
