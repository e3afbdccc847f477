// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use comfy_table::Table;
use nym_replay_window::ReplayWindow256;
use tracing::warn;

use crate::render::rendered_bitmap;

#[derive(Debug, Parser)]
#[clap(author = "Nymtech", version, about)]
pub(crate) struct Cli {
    /// Decimal nonce values applied to a fresh 256 bit window in argument
    /// order; arguments that do not parse as unsigned integers are skipped
    #[clap(required = true, allow_hyphen_values = true)]
    pub(crate) nonces: Vec<String>,
}

impl Cli {
    pub(crate) fn execute(self) -> anyhow::Result<()> {
        let nonces = parse_nonces(&self.nonces);
        if nonces.is_empty() {
            anyhow::bail!("none of the provided arguments were usable nonce values");
        }

        let mut window = ReplayWindow256::new();

        println!("applying nonces in order: {nonces:?}");

        let mut table = Table::new();
        table.set_header(vec!["Nonce", "OK?", "Reason", "Offset", "Bitmap"]);
        for nonce in nonces {
            let (reason, accepted) = window.check_and_update(nonce);

            // `None` exactly when the nonce fell below the window, where no
            // bit of the current bitmap belongs to it
            let highlight = nonce.checked_sub(window.offset());

            table.add_row(vec![
                nonce.to_string(),
                accepted.to_string(),
                reason.to_string(),
                window.offset().to_string(),
                rendered_bitmap(&window, highlight),
            ]);
        }
        println!("{table}");

        Ok(())
    }
}

fn parse_nonces(raw: &[String]) -> Vec<u64> {
    raw.iter()
        .filter_map(|arg| match arg.parse() {
            Ok(nonce) => Some(nonce),
            Err(_) => {
                warn!("skipping {arg:?} - not an unsigned nonce value");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_arguments_are_skipped_rather_than_fatal() {
        let raw = vec![
            "17".to_string(),
            "seventeen".to_string(),
            "-4".to_string(),
            "300".to_string(),
        ];
        assert_eq!(parse_nonces(&raw), vec![17, 300]);
    }
}
