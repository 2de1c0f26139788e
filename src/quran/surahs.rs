//! Static surah metadata in canonical (mushaf) order.

use super::{Revelation, SurahInfo};

use Revelation::{Meccan, Medinan};

const fn surah(
    number: u32,
    name: &'static str,
    transliteration: &'static str,
    translation: &'static str,
    ayah_count: u32,
    revelation: Revelation,
) -> SurahInfo {
    SurahInfo {
        number,
        name,
        transliteration,
        translation,
        ayah_count,
        revelation,
    }
}

pub static SURAHS: [SurahInfo; 114] = [
    surah(1, "الفاتحة", "Al-Faatiha", "The Opening", 7, Meccan),
    surah(2, "البقرة", "Al-Baqara", "The Cow", 286, Medinan),
    surah(3, "آل عمران", "Aal-i-Imraan", "The Family of Imraan", 200, Medinan),
    surah(4, "النساء", "An-Nisaa", "The Women", 176, Medinan),
    surah(5, "المائدة", "Al-Maaida", "The Table", 120, Medinan),
    surah(6, "الأنعام", "Al-An'aam", "The Cattle", 165, Meccan),
    surah(7, "الأعراف", "Al-A'raaf", "The Heights", 206, Meccan),
    surah(8, "الأنفال", "Al-Anfaal", "The Spoils of War", 75, Medinan),
    surah(9, "التوبة", "At-Tawba", "The Repentance", 129, Medinan),
    surah(10, "يونس", "Yunus", "Jonas", 109, Meccan),
    surah(11, "هود", "Hud", "Hud", 123, Meccan),
    surah(12, "يوسف", "Yusuf", "Joseph", 111, Meccan),
    surah(13, "الرعد", "Ar-Ra'd", "The Thunder", 43, Medinan),
    surah(14, "ابراهيم", "Ibrahim", "Abraham", 52, Meccan),
    surah(15, "الحجر", "Al-Hijr", "The Rock", 99, Meccan),
    surah(16, "النحل", "An-Nahl", "The Bee", 128, Meccan),
    surah(17, "الإسراء", "Al-Israa", "The Night Journey", 111, Meccan),
    surah(18, "الكهف", "Al-Kahf", "The Cave", 110, Meccan),
    surah(19, "مريم", "Maryam", "Mary", 98, Meccan),
    surah(20, "طه", "Taa-Haa", "Taa-Haa", 135, Meccan),
    surah(21, "الأنبياء", "Al-Anbiyaa", "The Prophets", 112, Meccan),
    surah(22, "الحج", "Al-Hajj", "The Pilgrimage", 78, Medinan),
    surah(23, "المؤمنون", "Al-Muminoon", "The Believers", 118, Meccan),
    surah(24, "النور", "An-Noor", "The Light", 64, Medinan),
    surah(25, "الفرقان", "Al-Furqaan", "The Criterion", 77, Meccan),
    surah(26, "الشعراء", "Ash-Shu'araa", "The Poets", 227, Meccan),
    surah(27, "النمل", "An-Naml", "The Ant", 93, Meccan),
    surah(28, "القصص", "Al-Qasas", "The Stories", 88, Meccan),
    surah(29, "العنكبوت", "Al-Ankaboot", "The Spider", 69, Meccan),
    surah(30, "الروم", "Ar-Room", "The Romans", 60, Meccan),
    surah(31, "لقمان", "Luqman", "Luqman", 34, Meccan),
    surah(32, "السجدة", "As-Sajda", "The Prostration", 30, Meccan),
    surah(33, "الأحزاب", "Al-Ahzaab", "The Clans", 73, Medinan),
    surah(34, "سبإ", "Saba", "Sheba", 54, Meccan),
    surah(35, "فاطر", "Faatir", "The Originator", 45, Meccan),
    surah(36, "يس", "Yaseen", "Yaseen", 83, Meccan),
    surah(37, "الصافات", "As-Saaffaat", "Those drawn up in Ranks", 182, Meccan),
    surah(38, "ص", "Saad", "The letter Saad", 88, Meccan),
    surah(39, "الزمر", "Az-Zumar", "The Groups", 75, Meccan),
    surah(40, "غافر", "Ghafir", "The Forgiver", 85, Meccan),
    surah(41, "فصلت", "Fussilat", "Explained in detail", 54, Meccan),
    surah(42, "الشورى", "Ash-Shura", "Consultation", 53, Meccan),
    surah(43, "الزخرف", "Az-Zukhruf", "Ornaments of gold", 89, Meccan),
    surah(44, "الدخان", "Ad-Dukhaan", "The Smoke", 59, Meccan),
    surah(45, "الجاثية", "Al-Jaathiya", "Crouching", 37, Meccan),
    surah(46, "الأحقاف", "Al-Ahqaf", "The Dunes", 35, Meccan),
    surah(47, "محمد", "Muhammad", "Muhammad", 38, Medinan),
    surah(48, "الفتح", "Al-Fath", "The Victory", 29, Medinan),
    surah(49, "الحجرات", "Al-Hujuraat", "The Inner Apartments", 18, Medinan),
    surah(50, "ق", "Qaaf", "The letter Qaaf", 45, Meccan),
    surah(51, "الذاريات", "Adh-Dhaariyat", "The Winnowing Winds", 60, Meccan),
    surah(52, "الطور", "At-Tur", "The Mount", 49, Meccan),
    surah(53, "النجم", "An-Najm", "The Star", 62, Meccan),
    surah(54, "القمر", "Al-Qamar", "The Moon", 55, Meccan),
    surah(55, "الرحمن", "Ar-Rahmaan", "The Beneficent", 78, Medinan),
    surah(56, "الواقعة", "Al-Waaqia", "The Inevitable", 96, Meccan),
    surah(57, "الحديد", "Al-Hadid", "The Iron", 29, Medinan),
    surah(58, "المجادلة", "Al-Mujaadila", "The Pleading Woman", 22, Medinan),
    surah(59, "الحشر", "Al-Hashr", "The Exile", 24, Medinan),
    surah(60, "الممتحنة", "Al-Mumtahana", "She that is to be examined", 13, Medinan),
    surah(61, "الصف", "As-Saff", "The Ranks", 14, Medinan),
    surah(62, "الجمعة", "Al-Jumu'a", "Friday", 11, Medinan),
    surah(63, "المنافقون", "Al-Munaafiqoon", "The Hypocrites", 11, Medinan),
    surah(64, "التغابن", "At-Taghaabun", "Mutual Disillusion", 18, Medinan),
    surah(65, "الطلاق", "At-Talaaq", "Divorce", 12, Medinan),
    surah(66, "التحريم", "At-Tahrim", "The Prohibition", 12, Medinan),
    surah(67, "الملك", "Al-Mulk", "The Sovereignty", 30, Meccan),
    surah(68, "القلم", "Al-Qalam", "The Pen", 52, Meccan),
    surah(69, "الحاقة", "Al-Haaqqa", "The Reality", 52, Meccan),
    surah(70, "المعارج", "Al-Ma'aarij", "The Ascending Stairways", 44, Meccan),
    surah(71, "نوح", "Nooh", "Noah", 28, Meccan),
    surah(72, "الجن", "Al-Jinn", "The Jinn", 28, Meccan),
    surah(73, "المزمل", "Al-Muzzammil", "The Enshrouded One", 20, Meccan),
    surah(74, "المدثر", "Al-Muddaththir", "The Cloaked One", 56, Meccan),
    surah(75, "القيامة", "Al-Qiyaama", "The Resurrection", 40, Meccan),
    surah(76, "الانسان", "Al-Insaan", "Man", 31, Medinan),
    surah(77, "المرسلات", "Al-Mursalaat", "The Emissaries", 50, Meccan),
    surah(78, "النبإ", "An-Naba", "The Announcement", 40, Meccan),
    surah(79, "النازعات", "An-Naazi'aat", "Those who drag forth", 46, Meccan),
    surah(80, "عبس", "Abasa", "He frowned", 42, Meccan),
    surah(81, "التكوير", "At-Takwir", "The Overthrowing", 29, Meccan),
    surah(82, "الإنفطار", "Al-Infitaar", "The Cleaving", 19, Meccan),
    surah(83, "المطففين", "Al-Mutaffifin", "Defrauding", 36, Meccan),
    surah(84, "الإنشقاق", "Al-Inshiqaaq", "The Splitting Open", 25, Meccan),
    surah(85, "البروج", "Al-Burooj", "The Constellations", 22, Meccan),
    surah(86, "الطارق", "At-Taariq", "The Morning Star", 17, Meccan),
    surah(87, "الأعلى", "Al-A'laa", "The Most High", 19, Meccan),
    surah(88, "الغاشية", "Al-Ghaashiya", "The Overwhelming", 26, Meccan),
    surah(89, "الفجر", "Al-Fajr", "The Dawn", 30, Meccan),
    surah(90, "البلد", "Al-Balad", "The City", 20, Meccan),
    surah(91, "الشمس", "Ash-Shams", "The Sun", 15, Meccan),
    surah(92, "الليل", "Al-Lail", "The Night", 21, Meccan),
    surah(93, "الضحى", "Ad-Dhuhaa", "The Morning Hours", 11, Meccan),
    surah(94, "الشرح", "Ash-Sharh", "The Consolation", 8, Meccan),
    surah(95, "التين", "At-Tin", "The Fig", 8, Meccan),
    surah(96, "العلق", "Al-Alaq", "The Clot", 19, Meccan),
    surah(97, "القدر", "Al-Qadr", "The Power, Fate", 5, Meccan),
    surah(98, "البينة", "Al-Bayyina", "The Evidence", 8, Medinan),
    surah(99, "الزلزلة", "Az-Zalzala", "The Earthquake", 8, Medinan),
    surah(100, "العاديات", "Al-Aadiyaat", "The Chargers", 11, Meccan),
    surah(101, "القارعة", "Al-Qaari'a", "The Calamity", 11, Meccan),
    surah(102, "التكاثر", "At-Takaathur", "Competition", 8, Meccan),
    surah(103, "العصر", "Al-Asr", "The Declining Day, Epoch", 3, Meccan),
    surah(104, "الهمزة", "Al-Humaza", "The Traducer", 9, Meccan),
    surah(105, "الفيل", "Al-Fil", "The Elephant", 5, Meccan),
    surah(106, "قريش", "Quraish", "Quraysh", 4, Meccan),
    surah(107, "الماعون", "Al-Maa'un", "Almsgiving", 7, Meccan),
    surah(108, "الكوثر", "Al-Kawthar", "Abundance", 3, Meccan),
    surah(109, "الكافرون", "Al-Kaafiroon", "The Disbelievers", 6, Meccan),
    surah(110, "النصر", "An-Nasr", "Divine Support", 3, Medinan),
    surah(111, "المسد", "Al-Masad", "The Palm Fibre", 5, Meccan),
    surah(112, "الإخلاص", "Al-Ikhlaas", "Sincerity", 4, Meccan),
    surah(113, "الفلق", "Al-Falaq", "The Dawn", 5, Meccan),
    surah(114, "الناس", "An-Naas", "Mankind", 6, Meccan),
];
