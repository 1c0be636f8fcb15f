//! Fixed name tables and uniform draws over them.
//!
//! The tables are static 25-entry lists of Czech given names and surnames,
//! split by gender. Generated records always combine a first name and a
//! surname from the tables matching their gender; the two draws are
//! independent.

use rand::Rng;

use crate::models::Gender;

/// First names assigned to male records.
pub const MALE_FIRST_NAMES: [&str; 25] = [
    "Adam",
    "Aleš",
    "Daniel",
    "David",
    "Filip",
    "Jaroslav",
    "Jan",
    "Jiří",
    "Karel",
    "Martin",
    "Milan",
    "Miloš",
    "Ondřej",
    "Pavel",
    "Radek",
    "Stanislav",
    "Tomáš",
    "Viktor",
    "Vladimír",
    "Vojtěch",
    "Vratislav",
    "Zdeněk",
    "Šimon",
    "Štěpán",
    "Marek",
];

/// First names assigned to female records.
pub const FEMALE_FIRST_NAMES: [&str; 25] = [
    "Alžběta",
    "Barbora",
    "Božena",
    "Denisa",
    "Eva",
    "Hana",
    "Helena",
    "Irena",
    "Ivana",
    "Jitka",
    "Kateřina",
    "Kristýna",
    "Lenka",
    "Lucie",
    "Magdaléna",
    "Marie",
    "Michaela",
    "Petra",
    "Radka",
    "Romana",
    "Simona",
    "Šárka",
    "Tereza",
    "Veronika",
    "Zdeňka",
];

/// Surnames assigned to male records.
pub const MALE_SURNAMES: [&str; 25] = [
    "Balog",
    "Bartoš",
    "Beneš",
    "Beran",
    "Doležal",
    "Dvořák",
    "Fiala",
    "Hájek",
    "Horák",
    "Hruška",
    "Jelínek",
    "Kadlec",
    "Král",
    "Krejčí",
    "Kříž",
    "Kučera",
    "Malý",
    "Marek",
    "Mareš",
    "Navrátil",
    "Němec",
    "Novák",
    "Novotný",
    "Polák",
    "Pospíšil",
];

/// Surnames assigned to female records.
pub const FEMALE_SURNAMES: [&str; 25] = [
    "Adamová",
    "Balogová",
    "Bartošová",
    "Benešová",
    "Beranová",
    "Doležalová",
    "Dvořáková",
    "Fialová",
    "Hájeková",
    "Horáková",
    "Hrušková",
    "Jelínková",
    "Kadlecová",
    "Králová",
    "Krejčíová",
    "Kučerová",
    "Malá",
    "Marešová",
    "Navrátilová",
    "Němcová",
    "Nováková",
    "Novotná",
    "Poláková",
    "Pospíšilová",
    "Procházková",
];

/// Draws a first name uniformly from the table matching `gender`.
pub fn random_first_name<R: Rng>(gender: Gender, rng: &mut R) -> &'static str {
    match gender {
        Gender::Male => pick(rng, &MALE_FIRST_NAMES),
        Gender::Female => pick(rng, &FEMALE_FIRST_NAMES),
    }
}

/// Draws a surname uniformly from the table matching `gender`.
pub fn random_surname<R: Rng>(gender: Gender, rng: &mut R) -> &'static str {
    match gender {
        Gender::Male => pick(rng, &MALE_SURNAMES),
        Gender::Female => pick(rng, &FEMALE_SURNAMES),
    }
}

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}
