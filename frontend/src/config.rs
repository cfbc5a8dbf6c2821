pub const DEFAULT_WHATSAPP_NUMBER: &str = "5582999532934";
pub const DEFAULT_CONVERSION_SEND_TO: &str = "AW-CONVERSION_ID/CONVERSION_LABEL";

pub const CONTACT_PHONE: &str = "+5582999532934";

pub const DEFAULT_CHAT_MESSAGE: &str =
    "Olá! Gostaria de saber mais sobre os serviços da PrimeCode Solutions.";
pub const FLOATING_CHAT_MESSAGE: &str =
    "Olá! Vi o site da PrimeCode Solutions e gostaria de saber mais sobre os serviços.";

pub const CHAT_WIDGET_DELAY_MS: u32 = 3_000;
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUCCESS_RESET_MS: u32 = 3_000;
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

/// WhatsApp recipient, taken from `WHATSAPP_NUMBER` at build time.
pub fn whatsapp_number() -> &'static str {
    match option_env!("WHATSAPP_NUMBER") {
        Some(number) if !number.is_empty() => number,
        _ => DEFAULT_WHATSAPP_NUMBER,
    }
}

pub fn conversion_send_to() -> &'static str {
    match option_env!("CONVERSION_SEND_TO") {
        Some(target) if !target.is_empty() => target,
        _ => DEFAULT_CONVERSION_SEND_TO,
    }
}

/// Where the contact form is posted. Without one the submission is simulated.
#[cfg(debug_assertions)]
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|url| !url.is_empty())
}

#[cfg(not(debug_assertions))]
pub fn contact_endpoint() -> Option<&'static str> {
    option_env!("CONTACT_ENDPOINT").filter(|url| !url.is_empty() && url.starts_with("https://"))
}
