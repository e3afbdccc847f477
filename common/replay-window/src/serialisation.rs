// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Byte-level snapshots of window state for callers that persist sessions.
//!
//! The layout is the offset as a big endian `u64` followed by the bitmap
//! words, most significant word first, each big endian. Restoring a snapshot
//! taken with a different word count fails rather than guessing.

use crate::bitmap::Bitmap;
use crate::window::ReplayWindow;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WindowSnapshotError {
    #[error("received {received} bytes of window state, expected {expected}")]
    InvalidSnapshotLength { received: usize, expected: usize },
}

impl<const WORDS: usize> ReplayWindow<WORDS> {
    /// Size of a serialised window snapshot in bytes.
    pub const SNAPSHOT_SIZE: usize = (1 + WORDS) * size_of::<u64>();

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::SNAPSHOT_SIZE);
        bytes.extend_from_slice(&self.offset.to_be_bytes());
        for word in self.bitmap.as_words() {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, WindowSnapshotError> {
        if bytes.len() != Self::SNAPSHOT_SIZE {
            return Err(WindowSnapshotError::InvalidSnapshotLength {
                received: bytes.len(),
                expected: Self::SNAPSHOT_SIZE,
            });
        }

        let word_size = size_of::<u64>();
        // the length check makes every chunk conversion below infallible
        let u64_at = |index: usize| {
            let chunk = &bytes[index * word_size..(index + 1) * word_size];
            u64::from_be_bytes(chunk.try_into().unwrap())
        };

        let offset = u64_at(0);
        let mut words = [0u64; WORDS];
        for (i, word) in words.iter_mut().enumerate() {
            *word = u64_at(1 + i);
        }

        Ok(ReplayWindow {
            offset,
            bitmap: Bitmap::from_words(words),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::ReplayWindow256;

    #[test]
    fn snapshot_layout_is_offset_then_bitmap_big_endian() {
        let mut window = ReplayWindow256::new();
        window.check_and_update(0);
        window.check_and_update(300);

        let bytes = window.to_bytes();
        assert_eq!(bytes.len(), ReplayWindow256::SNAPSHOT_SIZE);
        assert_eq!(u64::from_be_bytes(bytes[..8].try_into().unwrap()), 45);
        // nonce 300 sits at the last bit of the window, i.e. the lowest bit
        // of the least significant word
        assert_eq!(bytes[bytes.len() - 1] & 1, 1);
    }

    #[test]
    fn restored_windows_keep_classifying_like_the_original() {
        let mut window = ReplayWindow256::new();
        for nonce in [3, 17, 300, 299, 1000] {
            window.check_and_update(nonce);
        }

        let restored = ReplayWindow256::try_from_bytes(&window.to_bytes())
            .expect("failed to restore a freshly taken snapshot");

        assert_eq!(restored, window);
        for nonce in [3, 299, 1000, 1001, 500] {
            assert_eq!(restored.check(nonce), window.check(nonce));
        }
    }

    #[test]
    fn truncated_snapshots_are_rejected() {
        let window = ReplayWindow256::new();
        let bytes = window.to_bytes();

        assert_eq!(
            ReplayWindow256::try_from_bytes(&bytes[..bytes.len() - 1]),
            Err(WindowSnapshotError::InvalidSnapshotLength {
                received: 39,
                expected: 40,
            })
        );
        assert_eq!(
            ReplayWindow256::try_from_bytes(&[]),
            Err(WindowSnapshotError::InvalidSnapshotLength {
                received: 0,
                expected: 40,
            })
        );
    }
}
