//! Western tropical zodiac signs by calendar date.

use serde::{Deserialize, Serialize};

use crate::CalendarDate;
use crate::prelude::*;

/// Classical element of a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// First (month, day) of each sign in calendar order. Capricorn appears at
/// the end of the year and also covers Jan 1 through the day before Aquarius.
const SIGN_STARTS: [(u8, u8, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 21, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

impl ZodiacSign {
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Sign for a month (1-12) and day of month.
    pub fn from_month_day(month: u8, day: u8) -> Self {
        SIGN_STARTS
            .iter()
            .rev()
            .find(|&&(start_month, start_day, _)| (month, day) >= (start_month, start_day))
            .map_or(Self::Capricorn, |&(_, _, sign)| sign)
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Aries => '♈',
            Self::Taurus => '♉',
            Self::Gemini => '♊',
            Self::Cancer => '♋',
            Self::Leo => '♌',
            Self::Virgo => '♍',
            Self::Libra => '♎',
            Self::Scorpio => '♏',
            Self::Sagittarius => '♐',
            Self::Capricorn => '♑',
            Self::Aquarius => '♒',
            Self::Pisces => '♓',
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }
}

/// Sign, glyph and element for a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZodiacClassification {
    pub sign:    ZodiacSign,
    pub symbol:  char,
    pub element: Element,
}

impl From<ZodiacSign> for ZodiacClassification {
    fn from(sign: ZodiacSign) -> Self {
        Self {
            sign,
            symbol: sign.symbol(),
            element: sign.element(),
        }
    }
}

/// Classifies a date by month and day only; the year is ignored.
pub fn classify_zodiac(date: CalendarDate) -> ZodiacClassification {
    ZodiacSign::from_month_day(date.month(), date.day()).into()
}
