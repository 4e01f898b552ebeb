use crate::utils::error::{EtlError, Result};

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English name of `num` for 0..=99, written without spaces or hyphens
/// (`21` is `"twentyone"`).
pub fn int_to_english(num: usize) -> Result<String> {
    match num {
        0..=19 => Ok(UNITS[num].to_string()),
        20..=99 if num % 10 == 0 => Ok(TENS[num / 10].to_string()),
        20..=99 => Ok(format!("{}{}", TENS[num / 10], UNITS[num % 10])),
        _ => Err(EtlError::NumberOutOfRange { value: num }),
    }
}

/// File name of the bucket holding words of `length` characters.
pub fn word_file_name(length: usize) -> Result<String> {
    Ok(format!("{}LetterWords.json", int_to_english(length)?))
}
