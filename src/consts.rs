/// Date triple returned for day numbers a calendar cannot represent
pub const INVALID_TRIPLE: (u32, u8, u8) = (0, 0, 0);

/// Day number returned for dates a calendar cannot represent
pub const INVALID_SDN: i64 = 0;

/// First month of every calendar year
pub const MIN_MONTH: u8 = 1;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// First year of every supported calendar
pub const MIN_YEAR: u32 = 1;

// --- Tabular Islamic ---

/// SDN of 1 Muharram AH 1 (16 July 622, Julian)
pub const ISLAMIC_EPOCH: i64 = 1_948_440;

/// Years in one leap cycle
pub const ISLAMIC_CYCLE_YEARS: u32 = 30;

/// Days in one 30-year cycle (19 common years of 354 days, 11 leap years of 355)
pub const ISLAMIC_CYCLE_DAYS: u32 = 10_631;

/// Last supported year (inclusive)
pub const ISLAMIC_MAX_YEAR: u32 = 9999;

/// Cumulative day count at the end of each year of the cycle.
/// Leap years are 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29.
#[rustfmt::skip]
pub(crate) const ISLAMIC_YEAR_ENDS: [u32; 30] = [
    354, 709, 1063, 1417, 1772, 2126, 2481, 2835, 3189, 3544,
    3898, 4252, 4607, 4961, 5315, 5670, 6024, 6379, 6733, 7087,
    7442, 7796, 8150, 8505, 8859, 9214, 9568, 9922, 10277, 10631,
];

/// Cumulative day count at the end of each month.
/// Months alternate 30/29 days; the last entry is the leap year length,
/// common years end one day earlier.
pub(crate) const ISLAMIC_MONTH_ENDS: [u32; 12] =
    [30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 355];

/// Month names (index 0 is "no month")
pub(crate) const ISLAMIC_MONTH_NAMES: [&str; 13] = [
    "",
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

// --- French Republican ---

/// SDN of 1 Vendemiaire An I (22 September 1792, Gregorian)
pub const FRENCH_EPOCH: i64 = 2_375_840;

/// Years in one leap cycle
pub const FRENCH_CYCLE_YEARS: u32 = 4;

/// Days in one 4-year cycle
pub const FRENCH_CYCLE_DAYS: u32 = 1461;

/// Last supported year (inclusive). No authoritative leap rule exists past An XIV.
pub const FRENCH_MAX_YEAR: u32 = 14;

/// Month number of the epagomenal days at the end of the year
pub const FRENCH_EXTRA_MONTH: u8 = 13;

/// Cumulative day count at the end of each year of the cycle (year 3 is leap)
pub(crate) const FRENCH_YEAR_ENDS: [u32; 4] = [365, 730, 1096, 1461];

/// Cumulative day count at the end of each month, twelve 30-day months then
/// the extra days. The last entry is the leap year length.
#[rustfmt::skip]
pub(crate) const FRENCH_MONTH_ENDS: [u32; 13] = [
    30, 60, 90, 120, 150, 180, 210, 240, 270, 300, 330, 360, 366,
];

/// Month names (index 0 is "no month", index 13 the extra days)
pub(crate) const FRENCH_MONTH_NAMES: [&str; 14] = [
    "",
    "Vendemiaire",
    "Brumaire",
    "Frimaire",
    "Nivose",
    "Pluviose",
    "Ventose",
    "Germinal",
    "Floreal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Extra",
];

/// Separator between the bounds of a displayed day-number range
pub const RANGE_SEPARATOR: char = '/';
