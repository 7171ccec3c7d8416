/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits pair up by colour. The jack of trump's partner suit is promoted
/// into trump as the left bower, so [`Suit::complement`] shows up wherever
/// trump membership is decided.
///
/// The ordering (C < D < H < S) is arbitrary but consistent, used for
/// the fixed fallback ranking and for canonical key rendering.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    /// The other suit of the same colour.
    pub const fn complement(&self) -> Suit {
        match self {
            Suit::C => Suit::S,
            Suit::S => Suit::C,
            Suit::D => Suit::H,
            Suit::H => Suit::D,
        }
    }
}

/// u8 isomorphism, wrapping so that any card byte yields its suit
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        Suit::all()[(n % 4) as usize]
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism over the lowercase letters
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        b"cdhs"[s as usize] as char
    }
}
impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' | '♣' => Ok(Suit::C),
            'd' | '♦' => Ok(Suit::D),
            'h' | '♥' => Ok(Suit::H),
            's' | '♠' => Ok(Suit::S),
            _ => Err(format!("invalid suit char: {}", c)),
        }
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Suit::try_from(c),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
