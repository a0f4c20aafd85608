//! Internet lookup tables
//!
//! Pure data consumed by the identity, network, http, domain and emoji
//! generators. Immutable, loaded once, never mutated.

/// Real-world mailbox providers
pub const EMAIL_HOSTS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "protonmail.com",
    "icloud.com",
    "mail.com",
    "zoho.com",
];

/// Reserved documentation domains for example addresses
pub const EMAIL_EXAMPLE_HOSTS: &[&str] = &["example.com", "example.org", "example.net"];

/// Top-level suffixes appended to generated domain words
pub const DOMAIN_SUFFIXES: &[&str] = &[
    "com", "org", "net", "io", "dev", "info", "biz", "co", "tech", "app",
];

/// Web protocols
pub const WEB_PROTOCOLS: &[&str] = &["http", "https"];

/// HTTP request method names
pub const HTTP_METHODS: &[&str] = &["GET", "POST", "DELETE", "PATCH", "PUT"];

// Status codes partitioned by response class. The five lists are disjoint
// and together form the full set of returnable codes.
pub const HTTP_STATUS_INFORMATIONAL_CODES: &[u16] = &[100, 101, 102, 103];

pub const HTTP_STATUS_SUCCESS_CODES: &[u16] =
    &[200, 201, 202, 203, 204, 205, 206, 207, 208, 226];

pub const HTTP_STATUS_REDIRECTION_CODES: &[u16] =
    &[300, 301, 302, 303, 304, 305, 306, 307, 308];

pub const HTTP_STATUS_CLIENT_ERROR_CODES: &[u16] = &[
    400, 401, 402, 403, 404, 405, 406, 407, 408, 409, 410, 411, 412, 413, 414, 415, 416, 417,
    418, 421, 422, 423, 424, 425, 426, 428, 429, 431, 451,
];

pub const HTTP_STATUS_SERVER_ERROR_CODES: &[u16] =
    &[500, 501, 502, 503, 504, 505, 506, 507, 508, 510, 511];

/// Common request headers
pub const HTTP_REQUEST_HEADERS: &[&str] = &[
    "Accept",
    "Accept-Charset",
    "Accept-Encoding",
    "Accept-Language",
    "Authorization",
    "Cache-Control",
    "Connection",
    "Content-Length",
    "Content-Type",
    "Cookie",
    "Date",
    "Expect",
    "Forwarded",
    "From",
    "Host",
    "If-Match",
    "If-Modified-Since",
    "If-None-Match",
    "Origin",
    "Pragma",
    "Range",
    "Referer",
    "TE",
    "Upgrade",
    "User-Agent",
    "Via",
];

/// Common response headers
pub const HTTP_RESPONSE_HEADERS: &[&str] = &[
    "Accept-Ranges",
    "Age",
    "Allow",
    "Cache-Control",
    "Connection",
    "Content-Disposition",
    "Content-Encoding",
    "Content-Language",
    "Content-Length",
    "Content-Location",
    "Content-Range",
    "Content-Type",
    "Date",
    "ETag",
    "Expires",
    "Last-Modified",
    "Location",
    "Pragma",
    "Retry-After",
    "Server",
    "Set-Cookie",
    "Transfer-Encoding",
    "Vary",
    "Via",
    "WWW-Authenticate",
];

/// Common media types
pub const HTTP_MEDIA_TYPES: &[&str] = &[
    "application/javascript",
    "application/json",
    "application/octet-stream",
    "application/pdf",
    "application/x-www-form-urlencoded",
    "application/xml",
    "application/zip",
    "audio/mpeg",
    "image/gif",
    "image/jpeg",
    "image/png",
    "image/svg+xml",
    "multipart/form-data",
    "text/css",
    "text/csv",
    "text/html",
    "text/plain",
    "video/mp4",
];

/// 90-character password alphabet
pub const PASSWORD_CHARACTERS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789~`!@#$%^&*()_-+={[}]|:;\"'<,>.?/";

/// Restricted alphabet for anonymous usernames
pub const ANONYMOUS_USERNAME_CHARACTERS: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Separators joining first and last name inside a username
pub const USERNAME_SEPARATORS: &[&str] = &[".", "_", ""];

// Emoji tables, one per category.
pub const SMILEY_EMOJIS: &[&str] = &[
    "😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂", "🙂", "😉", "😊", "😇", "🥰", "😍", "😜",
    "😋", "😎",
];

pub const BODY_EMOJIS: &[&str] = &[
    "👋", "🤚", "🖐", "✋", "🖖", "👌", "✌", "🤞", "🤟", "🤘", "👍", "👎", "👏", "🙌", "💪",
];

pub const PERSON_EMOJIS: &[&str] = &[
    "👶", "🧒", "👦", "👧", "🧑", "👱", "👨", "🧔", "👩", "🧓", "👮", "🕵", "💂", "👷", "🤴",
    "👸",
];

pub const NATURE_EMOJIS: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🌲", "🌵", "🌻",
    "🌙",
];

pub const FOOD_EMOJIS: &[&str] = &[
    "🍏", "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🍒", "🍑", "🥭", "🍍", "🥥", "🍕",
    "🍔",
];

pub const TRAVEL_EMOJIS: &[&str] = &[
    "🚗", "🚕", "🚙", "🚌", "🚎", "🏎", "🚓", "🚑", "🚒", "✈", "🚀", "🛳", "🚆", "🚲", "🏝",
    "🗺",
];

pub const ACTIVITY_EMOJIS: &[&str] = &[
    "⚽", "🏀", "🏈", "⚾", "🥎", "🎾", "🏐", "🏉", "🥏", "🎱", "🏓", "🏸", "🥅", "⛳", "🎣",
    "🎽",
];

pub const OBJECT_EMOJIS: &[&str] = &[
    "⌚", "📱", "💻", "⌨", "🖥", "🖨", "🖱", "💽", "💾", "💿", "📀", "📷", "🔋", "🔌", "💡",
    "🔦",
];

pub const SYMBOL_EMOJIS: &[&str] = &[
    "❤", "🧡", "💛", "💚", "💙", "💜", "🖤", "💖", "💯", "✅", "❌", "⚠", "♻", "🔔", "✨",
];

pub const FLAG_EMOJIS: &[&str] = &[
    "🏁", "🚩", "🎌", "🏴", "🏳", "🇬🇧", "🇫🇷", "🇩🇪", "🇮🇹", "🇷🇴", "🇿🇦", "🇺🇸", "🇯🇵", "🇧🇷", "🇨🇦",
];
