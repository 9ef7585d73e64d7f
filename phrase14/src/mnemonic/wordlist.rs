//! English wordlist lookups.

use bip39::Language;

/// Number of words in the BIP-39 English wordlist.
pub(super) const WORDLIST_SIZE: usize = 2048;

/// The BIP-39 English wordlist in its canonical sorted order.
///
/// Sorted order makes exact lookups a binary search rather than a scan.
pub(super) struct Wordlist {
    words: &'static [&'static str; WORDLIST_SIZE],
}

impl Wordlist {
    pub(super) fn english() -> Self {
        Self {
            words: Language::English.word_list(),
        }
    }

    /// The word at `index`. Indices above 2047 cannot come out of an 11-bit
    /// chunk, so plain indexing is safe here.
    pub(super) fn word(&self, index: u16) -> &'static str {
        self.words[usize::from(index)]
    }

    /// The index of `word`, or `None` if it is not part of the list.
    pub(super) fn index_of(&self, word: &str) -> Option<u16> {
        self.words.binary_search(&word).ok().map(|index| index as u16)
    }
}
