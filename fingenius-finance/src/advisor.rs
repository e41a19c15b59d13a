//! Canned financial-literacy replies for the chat box.
//!
//! No model is consulted: greetings and fallbacks come from small pools, topic
//! keywords map to fixed answers. Pool choice is `seed % len` so callers decide
//! how varied the replies look.

const GREETING_WORDS: [&str; 8] = [
    "hi", "hello", "hey", "namaste", "yo", "what's up", "salaam", "hola",
];

const GREETINGS: [&str; 4] = [
    "Namaste! Kaise madad kar sakta hoon aaj?",
    "Hello! Welcome to FinGenius. Ask me anything about money.",
    "Hi there! Budget, investment, ya scam info chahiye?",
    "Hello dosto! Aaj kya seekhna hai?",
];

/// (keywords, reply), first match wins
const TOPICS: &[(&[&str], &str)] = &[
    (
        &["sip"],
        "SIP yaani Systematic Investment Plan ek aisa method hai jisme aap thoda-thoda paisa \
         regular invest karte ho mutual funds me.",
    ),
    (
        &["save", "saving"],
        "Saving ke liye 50-30-20 rule follow karo: 50% needs, 30% wants, 20% saving.",
    ),
    (
        &["scam", "fraud"],
        "Scam se bacho! Koi bhi OTP, CVV, PIN ya password mat do. Bank kabhi ye nahi maangta.",
    ),
    (
        &["budget"],
        "Budget banate waqt sabse pehle income aur fixed expenses likho. Uske baad variable \
         expenses control karo.",
    ),
    (
        &["invest"],
        "Investment ke liye apne risk tolerance ke hisaab se mutual funds, FD, ya stocks choose karo.",
    ),
    (
        &["upi"],
        "UPI transaction secure hai, lekin unknown links ya requests pe kabhi click mat karo.",
    ),
    (
        &["emergency", "fund"],
        "Emergency fund me kam se kam 3-6 months ka kharcha hona chahiye. Ye tough time me help karta hai.",
    ),
    (
        &["loan"],
        "Loan lene se pehle uska interest rate aur repayment term dhyan se samjho. Zyada loan \
         burden mat lo.",
    ),
];

const FALLBACKS: [&str; 5] = [
    "Achha sawaal hai! Kripya thoda aur detail me poochho.",
    "Financial literacy is important. Aapka sawaal bahut sahi jagah aaya hai!",
    "Great! Let's take charge of your financial future together.",
    "Mujhe lagta hai aapko budgeting se shuru karna chahiye. Want tips?",
    "Main aapki madad ke liye yahan hoon. Investment, savings, ya scam ke baare me poochhiye!",
];

fn pick(pool: &[&'static str], seed: u64) -> &'static str {
    pool[(seed % pool.len() as u64) as usize]
}

/// Reply to a chat message. Substring matching, case-insensitive.
pub fn reply(message: &str, seed: u64) -> &'static str {
    let lower = message.to_lowercase();

    if GREETING_WORDS.iter().any(|g| lower.contains(g)) {
        return pick(&GREETINGS, seed);
    }

    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, answer)| *answer)
        .unwrap_or_else(|| pick(&FALLBACKS, seed))
}

/// Stable seed derived from the message text (FNV-1a).
pub fn seed_for(message: &str) -> u64 {
    message.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ b as u64).wrapping_mul(0x0100_0000_01b3)
    })
}
