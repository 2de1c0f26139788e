//! Reciters and the storage prefix holding their per-ayah recordings.

use crate::quran::AyahRef;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reciter {
    pub id: &'static str,
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub storage_path: &'static str,
}

impl Reciter {
    /// Storage key of one ayah recording, e.g. `Husary_128kbps/001001.mp3`.
    pub fn audio_key(&self, ayah: AyahRef) -> String {
        format!("{}/{}", self.storage_path, ayah.audio_file_name())
    }
}

const fn reciter(
    id: &'static str,
    name: &'static str,
    arabic_name: &'static str,
    storage_path: &'static str,
) -> Reciter {
    Reciter {
        id,
        name,
        arabic_name,
        storage_path,
    }
}

pub static RECITERS: [Reciter; 44] = [
    reciter("husary", "Mahmoud Khalil Al-Husary", "محمود خليل الحصري", "Husary_128kbps"),
    reciter("husary-mujawwad", "Mahmoud Khalil Al-Husary (Mujawwad)", "محمود خليل الحصري (مجود)", "Husary_Mujawwad_64kbps"),
    reciter("husary-muallim", "Mahmoud Khalil Al-Husary (Muallim)", "محمود خليل الحصري (المعلم)", "Husary_Muallim_128kbps"),
    reciter("abdul-basit-murattal", "Abdul Basit Abdul Samad (Murattal)", "عبد الباسط عبد الصمد (مرتل)", "Abdul_Basit_Murattal_192kbps"),
    reciter("abdul-basit-mujawwad", "Abdul Basit Abdul Samad (Mujawwad)", "عبد الباسط عبد الصمد (مجود)", "Abdul_Basit_Mujawwad_128kbps"),
    reciter("alafasy", "Mishary Rashid Alafasy", "مشاري راشد العفاسي", "Alafasy_128kbps"),
    reciter("minshawy-murattal", "Mohamed Siddiq Al-Minshawi (Murattal)", "محمد صديق المنشاوي (مرتل)", "Minshawy_Murattal_128kbps"),
    reciter("minshawy-mujawwad", "Mohamed Siddiq Al-Minshawi (Mujawwad)", "محمد صديق المنشاوي (مجود)", "Minshawy_Mujawwad_192kbps"),
    reciter("ghamadi", "Saad Al-Ghamdi", "سعد الغامدي", "Ghamadi_40kbps"),
    reciter("sudais", "Abdurrahmaan As-Sudais", "عبد الرحمن السديس", "Abdurrahmaan_As-Sudais_192kbps"),
    reciter("shuraym", "Saood Ash-Shuraym", "سعود الشريم", "Saood_ash-Shuraym_128kbps"),
    reciter("maher", "Maher Al-Muaiqly", "ماهر المعيقلي", "Maher_AlMuaiqly_64kbps"),
    reciter("hudhaify", "Ali Al-Hudhaify", "علي الحذيفي", "Hudhaify_128kbps"),
    reciter("ayyoub", "Muhammad Ayyoub", "محمد أيوب", "Muhammad_Ayyoub_128kbps"),
    reciter("shaatree", "Abu Bakr Ash-Shaatree", "أبو بكر الشاطري", "Abu_Bakr_Ash-Shaatree_128kbps"),
    reciter("hani-rifai", "Hani Ar-Rifai", "هاني الرفاعي", "Hani_Rifai_192kbps"),
    reciter("ajamy", "Ahmed ibn Ali Al-Ajamy", "أحمد بن علي العجمي", "Ahmed_ibn_Ali_al-Ajamy_128kbps_ketaballah.net"),
    reciter("qatami", "Nasser Al-Qatami", "ناصر القطامي", "Nasser_Alqatami_128kbps"),
    reciter("dussary", "Yasser Ad-Dussary", "ياسر الدوسري", "Yasser_Ad-Dussary_128kbps"),
    reciter("jibreel", "Muhammad Jibreel", "محمد جبريل", "Muhammad_Jibreel_128kbps"),
    reciter("basfar", "Abdullah Basfar", "عبد الله بصفر", "Abdullah_Basfar_192kbps"),
    reciter("ali-jaber", "Ali Jaber", "علي جابر", "Ali_Jaber_64kbps"),
    reciter("akhdar", "Ibrahim Al-Akhdar", "إبراهيم الأخضر", "Ibrahim_Akhdar_32kbps"),
    reciter("tablaway", "Mohammad Al-Tablaway", "محمد الطبلاوي", "Mohammad_al_Tablaway_128kbps"),
    reciter("budair", "Salah Al-Budair", "صلاح البدير", "Salah_Al_Budair_128kbps"),
    reciter("qahtaanee", "Khalid Abdullah Al-Qahtaanee", "خالد عبد الله القحطاني", "Khaalid_Abdullaah_al-Qahtaanee_192kbps"),
    reciter("fares-abbad", "Fares Abbad", "فارس عباد", "Fares_Abbad_64kbps"),
    reciter("karim-mansoori", "Karim Mansoori", "كريم منصوري", "Karim_Mansoori_40kbps"),
    reciter("muhsin-qasim", "Muhsin Al-Qasim", "محسن القاسم", "Muhsin_Al_Qasim_192kbps"),
    reciter("bukhatir", "Salaah AbdulRahman Bukhatir", "صلاح بو خاطر", "Salaah_AbdulRahman_Bukhatir_128kbps"),
    reciter("yaser-salamah", "Yaser Salamah", "ياسر سلامة", "Yaser_Salamah_128kbps"),
    reciter("akram-alaqimy", "Akram Al-Alaqimy", "أكرم العلاقمي", "Akram_AlAlaqimy_128kbps"),
    reciter("ayman-sowaid", "Ayman Sowaid", "أيمن سويد", "Ayman_Sowaid_64kbps"),
    reciter("juhaynee", "Abdullaah Awwaad Al-Juhaynee", "عبد الله عواد الجهني", "Abdullaah_3awwaad_Al-Juhaynee_128kbps"),
    reciter("mustafa-ismail", "Mustafa Ismail", "مصطفى إسماعيل", "Mustafa_Ismail_48kbps"),
    reciter("aziz-alili", "Aziz Alili", "عزيز عليلي", "Aziz_Alili_128kbps"),
    reciter("nabil-rifai", "Nabil Ar-Rifai", "نبيل الرفاعي", "Nabil_Rifa3i_48kbps"),
    reciter("sahl-yassin", "Sahl Yassin", "سهل ياسين", "Sahl_Yassin_128kbps"),
    reciter("banna", "Mahmoud Ali Al-Banna", "محمود علي البنا", "mahmoud_ali_al_banna_32kbps"),
    reciter("parhizgar", "Shahriar Parhizgar", "شهريار پرهیزگار", "Parhizgar_48kbps"),
    reciter("tunaiji", "Khalefa Al-Tunaiji", "خليفة الطنيجي", "Khalefa_Al-Tunaiji_64kbps"),
    reciter("warsh-abdul-basit", "Abdul Basit Abdul Samad (Warsh)", "عبد الباسط عبد الصمد (ورش)", "warsh/warsh_Abdul_Basit_128kbps"),
    reciter("warsh-dosary", "Ibrahim Al-Dosary (Warsh)", "إبراهيم الدوسري (ورش)", "warsh/warsh_ibrahim_aldosary_128kbps"),
    reciter("warsh-jazaery", "Yassin Al-Jazaery (Warsh)", "ياسين الجزائري (ورش)", "warsh/warsh_yassin_al_jazaery_64kbps"),
];

pub fn find_reciter(id: &str) -> Option<&'static Reciter> {
    RECITERS.iter().find(|r| r.id == id)
}

/// Case-insensitive match on id and English name; the Arabic name is matched
/// as given.
pub fn search_reciters(query: &str) -> Vec<&'static Reciter> {
    let trimmed = query.trim();
    let term = trimmed.to_lowercase();
    RECITERS
        .iter()
        .filter(|r| {
            r.id.to_lowercase().contains(&term)
                || r.name.to_lowercase().contains(&term)
                || r.arabic_name.contains(trimmed)
        })
        .collect()
}
