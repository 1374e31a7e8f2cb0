//! Command-line arguments for the card generator.

use crate::card::CardOptions;
use clap::Parser;
use std::path::PathBuf;

/// Generate a printable A6 Christmas card with a QR code linking to a game
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target URL encoded in the QR code
    #[arg(long)]
    pub url: String,

    /// Recipient name printed after "Für:"
    #[arg(long, default_value = "Theresa")]
    pub to: String,

    /// Output PDF path
    #[arg(long, default_value = "weihnachtsbillet.pdf")]
    pub out: PathBuf,
}

impl From<&Args> for CardOptions {
    fn from(args: &Args) -> Self {
        CardOptions {
            url: args.url.clone(),
            recipient: args.to.clone(),
            output: args.out.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_recipient_and_output() {
        let args = Args::try_parse_from(["qr-card", "--url", "https://example.com"]).unwrap();
        assert_eq!(args.url, "https://example.com");
        assert_eq!(args.to, "Theresa");
        assert_eq!(args.out, PathBuf::from("weihnachtsbillet.pdf"));
    }

    #[test]
    fn url_is_required() {
        assert!(Args::try_parse_from(["qr-card", "--to", "Anna"]).is_err());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Args::try_parse_from(["qr-card", "--url", "u", "--colour", "red"]).is_err());
    }

    #[test]
    fn arguments_map_onto_card_options() {
        let args = Args::try_parse_from([
            "qr-card", "--url", "https://example.com", "--to", "Anna", "--out", "anna.pdf",
        ])
        .unwrap();
        let options = CardOptions::from(&args);
        assert_eq!(options.recipient, "Anna");
        assert_eq!(options.output, PathBuf::from("anna.pdf"));
    }
}
