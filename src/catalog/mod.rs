//! Static reference tables: reciters, athans and tafseers.

pub mod athan;
pub mod reciters;
pub mod tafseer;

pub use athan::{ATHAN_BUNDLE_KEY, ATHANS, Athan, Muezzin, filter_athans, find_athan, muezzins};
pub use reciters::{RECITERS, Reciter, find_reciter, search_reciters};
pub use tafseer::{Language, TAFSEERS, Tafseer, TafseerDocument, TafseerKind, find_tafseer};
