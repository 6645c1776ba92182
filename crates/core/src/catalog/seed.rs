use super::types::NewGame;

/// Categories offered as browse shortcuts. The server accepts any category.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "Action",
    "Puzzle",
    "Racing",
    "Strategy",
    "Emulators",
    "Arcade",
];

/// The initial catalog inserted into an empty store, in insertion order.
pub fn seed_games() -> Vec<NewGame> {
    vec![
        NewGame::new(
            "2048",
            "Join the numbers and get to the 2048 tile! A classic puzzle game.",
            "https://play2048.co/",
            "https://play-lh.googleusercontent.com/bZregCeEpzMwRoocLnsYb4Te-vPPHkW1k5H1xsQ3qK9yE00fixpWu5fNsUz3ut2IiDHn=w240-h480-rw",
            "html5",
            "Puzzle",
        )
        .featured(true),
        NewGame::new(
            "Hextris",
            "An addictive puzzle game inspired by Tetris. Rotate the hexagon to match colors.",
            "https://hextris.io/",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?auto=format&fit=crop&q=80&w=600",
            "html5",
            "Puzzle",
        ),
        NewGame::new(
            "Cookie Clicker",
            "Bake millions of cookies in this addictive idle game.",
            "https://orteil.dashnet.org/cookieclicker/",
            "https://images.unsplash.com/photo-1499636138143-bd649043ea52?auto=format&fit=crop&q=80&w=600",
            "html5",
            "Strategy",
        )
        .featured(true),
        NewGame::new(
            "Retro Space Shooter",
            "Classic arcade space shooter action.",
            "https://canvas-space-shooter.pages.dev/",
            "https://images.unsplash.com/photo-1552820728-8b83bb6b773f?auto=format&fit=crop&q=80&w=600",
            "html5",
            "Action",
        ),
        NewGame::new(
            "Minecraft Classic",
            "Play the classic version of Minecraft directly in your browser.",
            "https://classic.minecraft.net/",
            "https://images.unsplash.com/photo-1587573089734-09cb69c0f2b4?auto=format&fit=crop&q=80&w=600",
            "html5",
            "Adventure",
        )
        .featured(true),
        NewGame::new(
            "Pacman",
            "The retro classic Pacman. Eat dots and avoid ghosts!",
            "https://freepacman.org/",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?auto=format&fit=crop&q=80&w=600",
            "emulator",
            "Arcade",
        ),
        NewGame::new(
            "Tetris",
            "The world's most famous puzzle game.",
            "https://tetris.com/play-tetris",
            "https://images.unsplash.com/photo-1605901309584-818e25960b8f?auto=format&fit=crop&q=80&w=600",
            "html5",
            "Puzzle",
        ),
    ]
}
