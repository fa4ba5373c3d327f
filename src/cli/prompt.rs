use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::ops::picker::{Confirm, Confirmation};

/// Asks yes/no questions on stderr and reads the answer from a line of input.
///
/// Only "y" or "yes" (any case) confirm. Anything else, including end of
/// input, cancels.
pub struct LineConfirm<R> {
    input: R,
}

impl LineConfirm<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        LineConfirm {
            input: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl<R: AsyncBufRead + Unpin + Send> LineConfirm<R> {
    pub fn new(input: R) -> Self {
        LineConfirm { input }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> Confirm for LineConfirm<R> {
    async fn confirm(&mut self, prompt: &str) -> Confirmation {
        eprint!("{} [y/N] ", prompt);
        let mut line = String::new();
        match self.input.read_line(&mut line).await {
            Ok(_) => parse_answer(&line),
            Err(e) => {
                tracing::warn!(error = %e, "could not read answer, treating as no");
                Confirmation::Cancelled
            }
        }
    }
}

fn parse_answer(line: &str) -> Confirmation {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Cancelled,
    }
}
