use clap::Parser;

use crate::pass::{CharacterClass, PasswordRequest};

#[derive(Debug, Parser)]
#[command(
    name = "genpass",
    version,
    about = "Generate password",
    long_about = "Generate a random password from letters, digits and punctuation.\n\n\
                  With no class flag every class is used. Each selected class is \
                  guaranteed to appear at least once."
)]
pub struct CliFlags {
    /// Set the password length (minimum 8)
    #[arg(
        short,
        long,
        default_value_t = 16,
        env = "GENPASS_LENGTH",
        allow_negative_numbers = true
    )]
    pub length: i64,

    /// Include letters, digits and special characters
    #[arg(short, long)]
    pub all: bool,

    /// Include letters in the password
    #[arg(short = 'L', long)]
    pub letters: bool,

    /// Include digits in the password
    #[arg(short, long)]
    pub digits: bool,

    /// Include special characters in the password
    #[arg(short, long)]
    pub special_chars: bool,

    /// Copy the generated password to the clipboard
    #[arg(short, long)]
    pub copy_to_clipboard: bool,

    /// Suppress confirmations and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    pub fn request(&self) -> PasswordRequest {
        let selected = [self.letters, self.digits, self.special_chars];
        let classes: Vec<CharacterClass> = CharacterClass::ALL
            .into_iter()
            .zip(selected)
            .filter_map(|(class, on)| on.then_some(class))
            .collect();
        PasswordRequest {
            use_all: self.all,
            ..PasswordRequest::from_classes(&classes, self.length)
        }
    }
}
