//! Athan recordings.

use serde::Serialize;
use std::collections::HashMap;

pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Serialize)]
pub struct Athan {
    pub id: &'static str,
    pub name: &'static str,
    pub muezzin: &'static str,
    pub location: &'static str,
}

impl Athan {
    pub fn audio_key(&self) -> String {
        format!("athan/{}.mp3", self.id)
    }
}

const fn athan(
    id: &'static str,
    name: &'static str,
    muezzin: &'static str,
    location: &'static str,
) -> Athan {
    Athan {
        id,
        name,
        muezzin,
        location,
    }
}

pub const ATHAN_BUNDLE_KEY: &str = "athan/athan-collection.zip";

pub static ATHANS: [Athan; 32] = [
    athan("1a014366658c", "Abdulbasit Abdusamad", "Abdulbasit Abdusamad", "Egypt"),
    athan("54944191e2e2", "Ali Ibn Ahmad Mala", "Ali Ibn Ahmad Mala", "Mecca, Saudi Arabia"),
    athan("f5370aa1a7e2", "Yasser Al-Dosari", "Yasser Al-Dosari", "Saudi Arabia"),
    athan("8c052a5edec1", "Ahmed El Kourdi", "Ahmed El Kourdi", "Egypt"),
    athan("cd17c7200df5", "Muhammad Al Damradash", "Muhammad Al Damradash", "Egypt"),
    athan("0bf83c80b583", "Rabeh Ibn Darah Al Jazairi", "Rabeh Ibn Darah Al Jazairi", "Algeria"),
    athan("45299e6a8a68", "Nasser Al Obaid", "Nasser Al Obaid", "Saudi Arabia"),
    athan("e6ced81e9955", "Nasser Al Obaid 2", "Nasser Al Obaid", "Saudi Arabia"),
    athan("495dea4f4ea5", "Hamza Al Majale", "Hamza Al Majale", "Jordan"),
    athan("c5c12e0cdba9", "Al Duqale Muhammad Al Alam", "Al Duqale Muhammad Al Alam", "Unknown"),
    athan("8bd66fa73ff9", "Mohammed Salahuddin Kabbara", "Mohammed Salahuddin Kabbara", "Lebanon"),
    athan("c3460e1ab635", "Abdel Moneim Abdel Mobdi", "Abdel Moneim Abdel Mobdi", "Egypt"),
    athan("af79859edca6", "Abdulah Al Maknawe", "Abdulah Al Maknawe", "Unknown"),
    athan("3d8ef25160a8", "Akhdam Bnu Al Madane", "Akhdam Bnu Al Madane", "Unknown"),
    athan("290f81d9a73b", "Tareq Fathe Ahmad", "Tareq Fathe Ahmad", "Unknown"),
    athan("f30b7631d625", "Ahmed Al-Haddad", "Ahmed Al-Haddad", "Unknown"),
    athan("8e9025f379f2", "Mahammud Al-Najjar", "Mahammud Al-Najjar", "Unknown"),
    athan("8ea93508d061", "Samer Al-Sagheer", "Samer Al-Sagheer", "Unknown"),
    athan("edc62005fb50", "Belbashir AbdulKader", "Belbashir AbdulKader", "Unknown"),
    athan("6df79edd050f", "Mohammed Ibrahim", "Mohammed Ibrahim", "Unknown"),
    athan("651e00a18442", "Ezzedine Amarna", "Ezzedine Amarna", "Unknown"),
    athan("525b55254e29", "Badii Jadoo 1", "Badii Jadoo", "Unknown"),
    athan("f0c14e23d534", "Badii Jadoo 2", "Badii Jadoo", "Unknown"),
    athan("097fd8491db6", "Zayed Al-Attia", "Zayed Al-Attia", "Unknown"),
    athan("12cd996ece7f", "Islam Yassin", "Islam Yassin", "Unknown"),
    athan("a56ded8b4a29", "Athan 26", "Unknown", "Unknown"),
    athan("08008b8fec6c", "Eisaa Al-Haglawy", "Eisaa Al-Haglawy", "Unknown"),
    athan("83e17f5db5a7", "Mohamed Abdelbaeth", "Mohamed Abdelbaeth", "Unknown"),
    athan("7a837173da2c", "Mohammed Abdelhakeem", "Mohammed Abdelhakeem", "Unknown"),
    athan("cb51ad2c0c7e", "Mansour Zahrany", "Mansour Zahrany", "Unknown"),
    athan("e9bb86af0d30", "Mohamed Ramadan Saad", "Mohamed Ramadan Saad", "Unknown"),
    athan("d55c09c3357c", "Fayez AbdulSalam", "Fayez AbdulSalam", "Unknown"),
];

pub fn find_athan(id: &str) -> Option<&'static Athan> {
    ATHANS.iter().find(|a| a.id == id)
}

/// Athans whose muezzin and location contain the given filters
/// (case-insensitive). `None` matches everything.
pub fn filter_athans(muezzin: Option<&str>, location: Option<&str>) -> Vec<&'static Athan> {
    let muezzin = muezzin.map(str::to_lowercase);
    let location = location.map(str::to_lowercase);

    ATHANS
        .iter()
        .filter(|a| {
            muezzin
                .as_deref()
                .is_none_or(|m| a.muezzin.to_lowercase().contains(m))
        })
        .filter(|a| {
            location
                .as_deref()
                .is_none_or(|l| a.location.to_lowercase().contains(l))
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Muezzin {
    pub name: &'static str,
    pub location: &'static str,
    pub count: usize,
}

/// Named muezzins with their recording counts, most recordings first.
pub fn muezzins() -> Vec<Muezzin> {
    let mut order = Vec::new();
    let mut by_name: HashMap<&'static str, Muezzin> = HashMap::new();

    for a in ATHANS.iter().filter(|a| a.muezzin != UNKNOWN) {
        by_name
            .entry(a.muezzin)
            .and_modify(|m| m.count += 1)
            .or_insert_with(|| {
                order.push(a.muezzin);
                Muezzin {
                    name: a.muezzin,
                    location: a.location,
                    count: 1,
                }
            });
    }

    let mut muezzins: Vec<Muezzin> = order
        .into_iter()
        .filter_map(|name| by_name.remove(name))
        .collect();
    // stable: ties keep first-seen order
    muezzins.sort_by(|a, b| b.count.cmp(&a.count));
    muezzins
}
