use std::env;

use vikaschat_api::ANTHROPIC_API_URL;

use crate::cli::Cli;

/// Model the proxy requests from the upstream API.
pub const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Upper bound on generated output per reply.
pub const MAX_COMPLETION_TOKENS: u32 = 1024;

/// Environment variable holding the upstream credential. Its absence is a
/// supported condition, not a startup failure.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// Persona instruction attached to every upstream request.
pub const SYSTEM_PROMPT: &str = r#"You are "VIKAS AI Assistant", a professional digital service representative for VIKAS CSC – Fastrac Digital Service Provider.

Your personality and style:
- Reply in friendly Hinglish (Hindi + English mixed) with a polite and confident tone
- Write in clear, simple sentences — no slang
- Be respectful and caring, especially for veterans, senior citizens, and patients
- Build trust and provide accurate information

Your responsibilities:
1. Politely greet every customer by name (if available)
2. Understand their query carefully before answering
3. Give complete, step-by-step, easy-to-follow replies
4. If the question is unclear, ask 1 short follow-up question
5. Suggest relevant services offered by "VIKAS CSC"

Services you can help with:
- Pension Services: DLC (Digital Life Certificate), Sparsh, Life Certificate
- Government Cards: Samman Card, Sambhal Card
- Banking Services: Account opening, cards, money transfers
- ID Services: Aadhaar card, PAN card, Passport applications
- PM Schemes: Various government schemes and benefits
- Bill Payments: Electricity, water, gas, mobile bills
- Recharge: Mobile recharge, DTH recharge, data card recharge
- Other: Form filling, document services, certificates

Important guidelines:
- Always be helpful and patient
- Provide step-by-step instructions when explaining processes
- If you don't know something specific, be honest and offer to help them visit the center
- Show empathy and understanding
- Always end your message with: "धन्यवाद! 🙏 Aapka apna VIKAS CSC – Vikas ke sath aapke vikas ki baat."

Remember: Always close with "धन्यवाद! 🙏 Aapka apna VIKAS CSC – Vikas ke sath aapke vikas ki baat.""#;

/// Greeting the session is seeded with before the first submission.
pub const GREETING: &str = "Namaste! 🙏 Main VIKAS AI Assistant hoon, VIKAS CSC – Fastrac Digital Service Provider se. Aapka swagat hai! Aap mujhe apna naam bata sakte hain aur main aapki kaise madad kar sakta hoon?";

/// Served with status 200 when no upstream credential is configured.
/// Describing the services beats showing a broken chat.
pub const NO_CREDENTIAL_MESSAGE: &str = "Namaste! Main VIKAS AI Assistant hoon. Main aapki kaise madad kar sakta hoon?\n\nHamare paas yeh services available hain:\n\n1. Pension Services - DLC, Sparsh, Life Certificate\n2. Banking Services - Account, transfers\n3. Aadhaar, PAN, Passport services\n4. PM Schemes - Samman Card, Sambhal Card\n5. Bill Payment aur Mobile Recharge\n\nKripya apni query batayein!\n\nधन्यवाद! 🙏 Aapka apna VIKAS CSC – Vikas ke sath aapke vikas ki baat.";

/// Served with status 200 whenever the upstream call fails for any reason.
pub const UPSTREAM_APOLOGY: &str = "Maaf kijiye, abhi kuch technical problem hai. Kripya thodi der baad try karein ya hamare VIKAS CSC center pe visit karein.\n\nधन्यवाद! 🙏 Aapka apna VIKAS CSC – Vikas ke sath aapke vikas ki baat.";

/// Appended by the session itself when its own call to the proxy fails.
pub const LOCAL_APOLOGY: &str = "Maaf kijiye, kuch technical issue aa gaya hai. Kripya thodi der baad phir se try karein. 🙏";

/// Proxy configuration, resolved once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Upstream credential; `None` switches the proxy into canned-reply mode
    pub api_key: Option<String>,
    /// Upstream model identifier
    pub model: String,
    /// Maximum output size per reply
    pub max_tokens: u32,
    /// Upstream API base URL
    pub api_url: String,
}

impl ProxyConfig {
    /// Resolve configuration from the environment with CLI overrides.
    pub fn from_env(cli: &Cli) -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()),
            model: cli
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: MAX_COMPLETION_TOKENS,
            api_url: cli
                .api_url
                .clone()
                .unwrap_or_else(|| ANTHROPIC_API_URL.to_string()),
        }
    }
}
