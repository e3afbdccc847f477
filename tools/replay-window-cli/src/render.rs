// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use nym_replay_window::ReplayWindow;

/// Renders the full bitmap as a string of `0`s and `1`s, set bits bright,
/// unset bits dimmed and the bit belonging to the just-processed nonce red.
pub(crate) fn rendered_bitmap<const WORDS: usize>(
    window: &ReplayWindow<WORDS>,
    highlight: Option<u64>,
) -> String {
    let width = ReplayWindow::<WORDS>::WIDTH;
    let mut rendered = String::with_capacity(width as usize);

    for position in 0..width {
        let bit = if window.bitmap().is_bit_set(position) {
            "1"
        } else {
            "0"
        };

        let styled = if highlight == Some(position) {
            bit.red()
        } else if bit == "1" {
            bit.white()
        } else {
            bit.bright_black()
        };
        rendered.push_str(&styled.to_string());
    }

    rendered
}
