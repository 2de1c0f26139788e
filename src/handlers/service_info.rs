use axum::Json;
use serde_json::{Value, json};
use crate::{
    catalog::{ATHANS, RECITERS},
    quran::{GLOBAL_AYAH_COUNT, TOTAL_PAGES},
    types::HealthResponse,
};
use super::API_VERSION;

const SERVICE_NAME: &str = "Quran Audio API";

pub async fn api_info() -> Json<Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": API_VERSION,
        "description": format!(
            "Public API for streaming Quran audio recitations from {} renowned reciters",
            RECITERS.len()
        ),
        "endpoints": {
            "health": "/api/health",
            "reciters": "/api/v1/reciters",
            "surahs": "/api/v1/surahs",
            "audio": "/api/v1/audio/:reciterId/surah/:surahNumber/ayah/:ayahInSurah",
            "audioByGlobalAyah": "/api/v1/audio/:reciterId/:globalAyahNumber",
            "search": "/api/v1/search?q=<query>&type=<surah|reciter>",
            "credits": "/api/v1/credits",
            "quranText": "/api/v1/quran-text/manifest",
            "athan": "/api/v1/athan/manifest",
            "tafseer": "/api/v1/tafseer/manifest",
        },
        "features": [
            format!("{} renowned Quran reciters (including Warsh variants)", RECITERS.len()),
            format!("{} individual ayah audio files", GLOBAL_AYAH_COUNT),
            "HTTP Range requests support (seekable audio)",
            "CORS enabled for web applications",
            "Free and public - no authentication required",
        ],
        "dataSources": {
            "metadata": "Tanzil.net",
            "audio": "EveryAyah.com",
        },
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        version: API_VERSION,
        service: SERVICE_NAME,
    })
}

pub async fn credits() -> Json<Value> {
    Json(json!({
        "api": {
            "name": SERVICE_NAME,
            "version": API_VERSION,
            "description": "Public API for streaming Quran audio recitations",
            "license": "MIT",
        },
        "dataSources": [
            {
                "name": "Tanzil",
                "description": "Quran metadata including surah names, ayah counts, and structure",
                "website": "https://tanzil.net",
                "documentation": "https://tanzil.net/docs",
                "attribution": "Quran metadata sourced from Tanzil.net",
                "license": "Please refer to Tanzil.net for licensing terms",
            },
            {
                "name": "EveryAyah",
                "description": format!("Quran audio recitations by {} renowned reciters", RECITERS.len()),
                "website": "https://everyayah.com",
                "attribution": "Audio recordings sourced from EveryAyah.com",
                "license": "Please refer to EveryAyah.com for licensing terms",
                "content": {
                    "reciters": RECITERS.len(),
                    "totalAyahs": GLOBAL_AYAH_COUNT,
                    "format": "MP3",
                },
            },
            {
                "name": "Quran SVG",
                "description": "SVG files for the pages of the Quran (Madani Mushaf)",
                "website": "https://github.com/batoulapps/quran-svg",
                "attribution": "SVG pages created by Batoul Apps, sourced from King Fahd Quran Printing Complex",
                "license": "MIT",
                "content": {
                    "totalPages": TOTAL_PAGES,
                    "format": "SVG",
                    "originalSource": "King Fahd Quran Printing Complex",
                },
            },
            {
                "name": "Assabile",
                "description": "Athan (Adhan) audio recordings from muezzins worldwide",
                "website": "https://www.assabile.com",
                "attribution": "Athan audio recordings sourced from Assabile.com",
                "license": "Please refer to Assabile.com for licensing terms",
                "content": {
                    "totalAthans": ATHANS.len(),
                    "format": "MP3",
                },
            },
        ],
        "acknowledgments": [
            "Tanzil.net for providing comprehensive Quran metadata",
            "EveryAyah.com for providing high-quality Quran audio recitations",
            "Batoul Apps (quran-svg) for providing Quran text in SVG format",
            "King Fahd Quran Printing Complex for the original Quran typography",
            "Assabile.com for providing athan audio recordings",
        ],
        "disclaimer": "This API is provided for educational and religious purposes. Please respect the rights of the original content creators and refer to their respective websites for terms of use.",
    }))
}
