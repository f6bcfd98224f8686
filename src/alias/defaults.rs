//! Built-in aliases seeded into every [`AliasTable`](super::AliasTable).
//!
//! Names and templates are written without the command prefix; it is
//! prepended when the table is built so a custom prefix keeps them working.

pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    // General
    ("p", "part $1+"),
    ("me", "action $1+"),
    ("j", "join $1+"),
    ("q", "query $1+"),
    ("w", "whois $1+"),
    ("raw", "quote $1+"),
    ("connect", "server $1+"),
    // Channel operator shortcuts
    ("op", "quote mode $channel +o $1+"),
    ("deop", "quote mode $channel -o $1+"),
    ("hop", "quote mode $channel +h $1+"),
    ("dehop", "quote mode $channel -h $1+"),
    ("voice", "quote mode $channel +v $1+"),
    ("devoice", "quote mode $channel -v $1+"),
    ("k", "kick $channel $1+"),
    ("ban", "quote mode $channel +b $1+"),
    ("unban", "quote mode $channel -b $1+"),
    // Misc
    ("slap", "me slaps $1 around a bit with a large trout"),
    ("tick", "msg $channel \u{2714}"),
];
