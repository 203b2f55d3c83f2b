//! Portfolio Data
//!
//! The directory layout, file texts and canned blocks the shell ships with.
//! Text lives next to this module under `files/` (what `cat` prints) and
//! `banners/` (what the profile and simulation commands print).

use crate::content::ContentStore;
use crate::fs::{join, normalize, DirEntry, VirtualFs};

/// Files `cat` can show, in registration order.
const FILES: &[(&str, &str)] = &[
    ("about.txt", include_str!("files/about.txt")),
    ("contact.info", include_str!("files/contact.info")),
    ("skills.md", include_str!("files/skills.md")),
    ("welcome.md", include_str!("files/welcome.md")),
    ("cybersecurity-basics.md", include_str!("files/cybersecurity-basics.md")),
    ("ethical-hacking.md", include_str!("files/ethical-hacking.md")),
    ("project1.txt", include_str!("files/project1.txt")),
    ("project2.txt", include_str!("files/project2.txt")),
    ("project3.txt", include_str!("files/project3.txt")),
    ("security-icon.svg", include_str!("files/security-icon.svg")),
    ("hacker-bg.svg", include_str!("files/hacker-bg.svg")),
];

/// Easter eggs behind `secret.txt`; one is picked per read.
pub const SECRETS: &[&str] = &[
    "╭─[ SECRETS.TXT ]\n│ Found bug. Reported it.\n│ Company fixed it. Gave me a sticker.\n│ Hacker life: 💀\n╰────────────────────",
    "If (it works) {\n   don't touch it;\n} else {\n   blame the intern;\n}",
    "Yes, I once used inspect element to change my grades.\nNo, it didn’t work.",
    "The real 0-day is... trusting user input 😭",
    "- Recon: 10/10\n- Exploitation: 8/10\n- Reporting bugs without crying: 2/10",
    "Bug bounty leaderboard?\nNah bro, I’m on the “reported but duplicate” leaderboard.",
    "roses are #FF0000\nviolets are #0000FF\nI run nmap on your heart\nand it’s open too",
    "OnlyScans™ — subscribe to see my recon methods 😏",
    "Me: cat secrets.txt\nChatGPT: “Meow.”",
    "Reported RCE.\nThey replied: “Working as intended.”",
];

pub const ABOUT_BANNER: &str = include_str!("banners/about.txt");
pub const SKILLS_BANNER: &str = include_str!("banners/skills.txt");
pub const PROJECTS_BANNER: &str = include_str!("banners/projects.txt");
pub const CONTACT_BANNER: &str = include_str!("banners/contact.txt");
pub const MATRIX_BANNER: &str = include_str!("banners/matrix.txt");
pub const HACK_DISCLAIMER: &str = include_str!("banners/hack_disclaimer.txt");
pub const SSH_HOST_KEY: &str = include_str!("banners/ssh_host_key.txt");
pub const SSH_DENIED: &str = include_str!("banners/ssh_denied.txt");

/// Strip the newline the asset file ends with.
pub fn block(raw: &str) -> &str {
    raw.strip_suffix('\n').unwrap_or(raw)
}

/// Directory tree rooted at `home`.
pub fn default_tree(home: &str) -> VirtualFs {
    let home = normalize(home);
    let projects = join(&home, "projects");
    let blog = join(&home, "blog");
    let images = join(&blog, "images");

    VirtualFs::builder(home.as_str())
        .dir(home.as_str(), [
            ("about.txt", DirEntry::file("2.1K")),
            ("skills.md", DirEntry::file("1.8K")),
            ("projects", DirEntry::directory("4.0K")),
            ("contact.info", DirEntry::file("512B")),
            ("blog", DirEntry::directory("8.0K")),
            ("secret.txt", DirEntry::file("128B")),
        ])
        .dir(projects, [
            ("project1.txt", DirEntry::file("1.2K")),
            ("project2.txt", DirEntry::file("1.5K")),
            ("project3.txt", DirEntry::file("2.0K")),
        ])
        .dir(blog, [
            ("welcome.md", DirEntry::file("3.2K")),
            ("cybersecurity-basics.md", DirEntry::file("5.1K")),
            ("ethical-hacking.md", DirEntry::file("4.8K")),
            ("images", DirEntry::directory("2.0K")),
        ])
        .dir(images, [
            ("security-icon.svg", DirEntry::file("1.2K")),
            ("hacker-bg.svg", DirEntry::file("800B")),
        ])
        .build()
}

/// Every readable file plus the `secret.txt` pool.
pub fn default_content() -> ContentStore {
    let mut store = ContentStore::new();
    for (name, raw) in FILES {
        store.insert(*name, block(raw));
    }
    store.insert_pool("secret.txt", SECRETS.iter().copied());
    store
}
