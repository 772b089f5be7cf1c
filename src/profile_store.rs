// Name-keyed profile records on local storage. The whole book is one JSON
// document under a versioned key; a version mismatch or corrupt record
// degrades to an empty book rather than failing startup.

use rangecard_core::{Profile, ProfileBook, PROFILE_BOOK_VERSION};

use crate::persisted::{self, PROFILE_BOOK_KEY};

pub(crate) fn load_book() -> ProfileBook {
    let Some(book) = persisted::read_json::<ProfileBook>(PROFILE_BOOK_KEY) else {
        return ProfileBook::default();
    };
    if book.version != PROFILE_BOOK_VERSION {
        gloo::console::log!(
            "profile store: version mismatch",
            book.version,
            PROFILE_BOOK_VERSION
        );
        return ProfileBook::default();
    }
    book
}

fn save_book(book: &ProfileBook) -> Result<(), String> {
    persisted::write_json(PROFILE_BOOK_KEY, book)
}

// Upserts under `name`, silently overwriting an existing record.
pub(crate) fn save_profile(name: &str, profile: Profile) -> Result<(), String> {
    let mut book = load_book();
    book.upsert(name, profile);
    save_book(&book)
}

pub(crate) fn load_profile(name: &str) -> Option<Profile> {
    load_book().get(name).cloned()
}

// A missing name is a no-op, not an error.
pub(crate) fn delete_profile(name: &str) -> Result<(), String> {
    let mut book = load_book();
    if !book.remove(name) {
        return Ok(());
    }
    save_book(&book)
}

pub(crate) fn profile_names() -> Vec<String> {
    load_book().names()
}
