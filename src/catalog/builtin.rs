//! Built-in Lucide icon table used when no catalog file is configured.

use super::{Catalog, CatalogEntry};

type Row = (&'static str, &'static [&'static str], &'static [&'static str]);

#[rustfmt::skip]
const ICONS: &[Row] = &[
    ("activity", &["pulse", "action", "motion", "movement", "exercise", "fitness", "healthcare", "heart rate monitor", "vital signs", "vitals"], &["medical", "account", "social", "science", "multimedia"]),
    ("alarm-clock", &["morning", "time", "alert", "alarm"], &["time", "devices", "notifications"]),
    ("anchor", &["ship", "harbor", "port"], &["transportation", "text"]),
    ("archive", &["index", "backup", "box", "storage", "records"], &["files"]),
    ("arrow-down", &["backwards", "reverse", "direction", "south"], &["arrows"]),
    ("arrow-left", &["previous", "back", "direction", "west"], &["arrows"]),
    ("arrow-right", &["forward", "next", "direction", "east"], &["arrows"]),
    ("arrow-up", &["forward", "direction", "north"], &["arrows"]),
    ("bell", &["alarm", "notification", "sound", "reminder"], &["account", "notifications"]),
    ("bell-off", &["alarm", "notification", "silent", "reminder"], &["notifications"]),
    ("bookmark", &["read", "clip", "marker", "tag"], &["account"]),
    ("calendar", &["date", "month", "year", "event"], &["time"]),
    ("camera", &["photo", "webcam", "video"], &["photography", "devices", "communication"]),
    ("check", &["done", "todo", "tick", "complete", "task"], &["notifications"]),
    ("chevron-down", &["backwards", "reverse", "slow", "dropdown"], &["arrows"]),
    ("chevron-up", &["caret", "keyboard", "mac", "control", "ctrl", "superscript", "exponential", "power", "ahead", "fast"], &["arrows", "math"]),
    ("circle", &["off", "zero", "record", "shape"], &["shapes"]),
    ("circle-user", &["person", "account", "contact"], &["account"]),
    ("clipboard", &["copy", "paste"], &["text"]),
    ("clock", &["time", "watch", "alarm"], &["time"]),
    ("cloud", &["weather"], &["weather"]),
    ("code", &["source", "programming", "html", "xml"], &["text", "development"]),
    ("cog", &["computing", "settings", "cog", "edit", "gear", "preferences"], &["account"]),
    ("copy", &["clone", "duplicate", "multiple"], &["text"]),
    ("download", &["import", "export", "save"], &["arrows", "files"]),
    ("eye", &["view", "watch", "see", "show", "expose", "reveal", "display", "visible", "visibility", "vision", "preview", "read"], &["accessibility", "photography", "design", "security"]),
    ("eye-off", &["view", "watch", "see", "hide", "conceal", "mask", "hidden", "visibility", "vision"], &["accessibility", "photography", "design", "security"]),
    ("file", &["document"], &["files"]),
    ("file-text", &["data", "txt", "pdf", "document"], &["files", "text"]),
    ("folder", &["directory"], &["files"]),
    ("folder-open", &["directory"], &["files"]),
    ("globe", &["world", "browser", "language", "translate"], &["navigation", "development"]),
    ("heart", &["like", "love", "emotion", "suit", "playing", "cards"], &["medical", "social", "multimedia", "emoji", "gaming", "shapes"]),
    ("house", &["home", "living", "building", "residence", "architecture"], &["buildings", "navigation", "account"]),
    ("image", &["picture", "photo"], &["photography", "text", "multimedia", "files"]),
    ("inbox", &["email"], &["account", "mail"]),
    ("info", &["help"], &["accessibility", "notifications"]),
    ("key", &["password", "login", "authentication", "secure", "unlock"], &["security", "account"]),
    ("layout-grid", &["app", "home", "start"], &["layout", "design"]),
    ("link", &["chain", "url"], &["text", "development"]),
    ("list", &["options"], &["text"]),
    ("lock", &["security", "password", "secure", "admin"], &["security"]),
    ("log-in", &["sign in", "arrow", "enter", "auth"], &["arrows", "account"]),
    ("log-out", &["sign out", "arrow", "exit", "auth"], &["arrows", "account"]),
    ("mail", &["email", "message", "letter", "send"], &["text", "social", "account", "mail"]),
    ("map-pin", &["location", "waypoint", "marker", "drop"], &["navigation", "travel"]),
    ("menu", &["bars", "navigation", "hamburger", "options"], &["layout", "account"]),
    ("message-circle", &["comment", "chat", "conversation", "dialog", "feedback", "speech bubble"], &["social"]),
    ("mic", &["record", "sound", "listen", "radio", "podcast", "microphone"], &["devices", "multimedia", "communication"]),
    ("moon", &["dark", "night"], &["accessibility", "weather"]),
    ("pencil", &["rename"], &["text", "design", "tools"]),
    ("phone", &["call", "voice", "mobile"], &["text", "connectivity", "devices", "communication"]),
    ("play", &["music", "audio", "video", "start", "run"], &["arrows", "multimedia"]),
    ("plus", &["add", "new", "increase", "increment", "positive", "calculate", "crosshair", "aim", "target", "scope", "sight", "reticule", "maximum", "upgrade", "extra"], &["math", "tools", "development", "text", "cursors", "gaming"]),
    ("search", &["find", "scan", "magnifier", "magnifying glass", "lens"], &["text", "social"]),
    ("settings", &["cog", "edit", "gear", "preferences"], &["account"]),
    ("share", &["network", "connections"], &["account", "social"]),
    ("shield", &["cybersecurity", "secure", "safety", "protection", "guardian", "armored", "armoured", "defense", "defence", "defender", "block", "threat", "prevention", "antivirus", "vigilance", "vigilant", "active", "activated", "enabled"], &["account", "security", "development", "gaming"]),
    ("shopping-cart", &["trolley", "cart", "basket", "e-commerce", "store", "purchase", "products", "items", "ingredients"], &["shopping"]),
    ("star", &["bookmark", "favorite", "like", "review", "rating"], &["account", "social", "shapes", "multimedia", "weather", "emoji", "gaming"]),
    ("sun", &["brightness", "weather", "light", "summer"], &["accessibility", "weather", "seasons", "sustainability"]),
    ("trash", &["garbage", "delete", "remove", "bin"], &["files", "mail"]),
    ("trash-2", &["garbage", "delete", "remove", "bin"], &["files", "mail"]),
    ("upload", &["file"], &["arrows", "files"]),
    ("user", &["person", "account", "contact"], &["account"]),
    ("user-check", &["followed", "subscribed", "done", "todo", "tick", "complete", "task"], &["account"]),
    ("user-minus", &["delete", "remove", "unfollow", "unsubscribe"], &["account"]),
    ("user-plus", &["new", "add", "create", "follow", "subscribe"], &["account"]),
    ("user-round", &["person", "account", "contact"], &["account", "people"]),
    ("users", &["group", "people"], &["account"]),
    ("wifi", &["connection", "signal", "wireless"], &["connectivity", "devices"]),
    ("x", &["cancel", "close", "delete", "remove", "times", "clear", "math", "multiply", "multiplication"], &["math", "notifications"]),
    ("zap", &["flash", "camera", "lightning", "electricity", "energy"], &["weather", "devices", "photography", "gaming", "sustainability"]),
];

/// Build the built-in catalog.
pub fn builtin() -> Catalog {
    ICONS
        .iter()
        .map(|(name, tags, categories)| {
            (*name, CatalogEntry::new(tags.iter(), categories.iter()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_builtin_names_are_unique() {
        check!(builtin().len() == ICONS.len());
    }

    #[test]
    fn test_builtin_tokens_are_lowercase() {
        for (name, entry) in builtin().iter() {
            for token in entry.tags.iter().chain(&entry.categories) {
                check!(*token == token.to_lowercase(), "{name}: {token}");
            }
        }
    }
}
