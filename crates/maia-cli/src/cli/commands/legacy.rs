//! Legacy single-session chat on `POST /chat`.
//!
//! Reads prompts line by line from stdin and prints each reply. The history
//! lives only in this process. `:q` or end of input quits.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use maia_core::api::MaiaClient;
use maia_core::chat::LegacyConversation;
use maia_core::transcript::SendRejection;

use super::history::format_item;

const QUIT_COMMAND: &str = ":q";

pub async fn run(client: MaiaClient) -> Result<()> {
    let mut conversation = LegacyConversation::new(client);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("read prompt")? == 0 {
            break;
        }
        let prompt = line.trim_end_matches(['\n', '\r']);
        if prompt.trim() == QUIT_COMMAND {
            break;
        }

        match conversation.send(prompt).await {
            Ok(items) => {
                let last = items.last().map(format_item);
                match conversation.last_reply() {
                    Some(reply) => writeln!(stdout, "Maia: {reply}")?,
                    None => {
                        if let Some(line) = last {
                            writeln!(stdout, "{line}")?;
                        }
                    }
                }
            }
            Err(SendRejection::EmptyPrompt) => {}
            Err(other) => return Err(other).context("legacy send"),
        }
    }

    Ok(())
}
