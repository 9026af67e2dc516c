// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Gregorian <-> Jalali conversion.
//!
//! Both directions go through a Julian day number intermediate; the Jalali
//! side uses the arithmetic break-table formulation of the 33-year leap
//! cycle (Khayyam calendar reform as tabulated by Birashk), which matches
//! the published leap years of the official Iranian calendar throughout
//! the supported range.
//!
//! Supported range: Jalali years -61 to 3177, i.e. Gregorian 560 to 3797.
//! Conversions assert on input outside that range rather than clamping.

use crate::date::{GregorianDate, PersianDate};

/// First Jalali years of the spans over which the 33-year leap cycle
/// drifts; the leap count accumulates span by span.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// Converts a Gregorian date to its Jalali equivalent.
pub fn to_persian(g: GregorianDate) -> PersianDate {
    d2j(g2d(g.year, g.month as i32, g.day as i32))
}

/// Converts a Jalali date to its Gregorian equivalent.
pub fn to_gregorian(p: PersianDate) -> GregorianDate {
    d2g(j2d(p.year, p.month as i32, p.day as i32))
}

/// Whether the Jalali year has 366 days (Esfand runs to day 30).
pub fn is_leap_persian_year(year: i32) -> bool {
    jal_cal(year).leap == 0
}

/// Whether the Gregorian year has 366 days.
pub fn is_leap_gregorian_year(year: i32) -> bool {
    year % 4 == 0 && year % 100 != 0 || year % 400 == 0
}

/// Number of days in a Jalali month: 31 for Farvardin through Shahrivar,
/// 30 for Mehr through Bahman, and 29 or 30 for Esfand depending on the
/// leap cycle.
pub fn days_in_persian_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ => {
            if is_leap_persian_year(year) {
                30
            } else {
                29
            }
        }
    }
}

/// Number of days in a Gregorian month.
pub fn days_in_gregorian_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_gregorian_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Weekday of day 1 of a Jalali month, 0 through 6 counted from Saturday
/// (the first day of the Persian week).
pub fn first_weekday_of_persian_month(year: i32, month: u32) -> u32 {
    // Sunday-based Gregorian weekday shifted one slot so Saturday maps to 0.
    ((j2d(year, month as i32, 1) + 2) % 7) as u32
}

/// Weekday of day 1 of a Gregorian month, 0 through 6 counted from Sunday.
pub fn first_weekday_of_gregorian_month(year: i32, month: u32) -> u32 {
    ((g2d(year, month as i32, 1) + 1) % 7) as u32
}

struct JalCal {
    /// Days left in the year's leap sub-cycle; 0 means a leap year.
    leap: i32,
    /// The Gregorian year holding this Jalali year's Farvardin 1.
    gy: i32,
    /// Day of March on which Farvardin 1 falls.
    march: i32,
}

/// Leap status of a Jalali year and the Gregorian date of its Farvardin 1.
fn jal_cal(jy: i32) -> JalCal {
    assert!(
        jy >= BREAKS[0] && jy < BREAKS[BREAKS.len() - 1],
        "Jalali year {jy} outside supported range {}..{}",
        BREAKS[0],
        BREAKS[BREAKS.len() - 1],
    );

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    // Accumulate leap days span by span up to the one containing jy.
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + jump % 33 / 4;
        jp = jm;
    }
    let mut n = jy - jp;

    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days over the same stretch fix Farvardin 1 in March.
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    JalCal { leap, gy, march }
}

/// Julian day number of a Jalali date.
fn j2d(jy: i32, jm: i32, jd: i32) -> i32 {
    let r = jal_cal(jy);
    g2d(r.gy, 3, r.march) + (jm - 1) * 31 - jm / 7 * (jm - 7) + jd - 1
}

/// Jalali date of a Julian day number.
fn d2j(jdn: i32) -> PersianDate {
    let gy = d2g(jdn).year;
    let mut jy = gy - 621;
    let r = jal_cal(jy);
    let farvardin1 = g2d(gy, 3, r.march);

    let mut k = jdn - farvardin1;
    if k >= 0 {
        if k <= 185 {
            return PersianDate::new(jy, (1 + k / 31) as u32, (k % 31 + 1) as u32);
        }
        k -= 186;
    } else {
        // Before Nowruz: the day belongs to the previous Jalali year.
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }
    PersianDate::new(jy, (7 + k / 30) as u32, (k % 30 + 1) as u32)
}

/// Julian day number of a Gregorian date.
fn g2d(gy: i32, gm: i32, gd: i32) -> i32 {
    let d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}

/// Gregorian date of a Julian day number.
fn d2g(jdn: i32) -> GregorianDate {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = j % 1461 / 4 * 5 + 308;
    let gd = i % 153 / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100100 + (8 - gm) / 6;
    GregorianDate::new(gy, gm as u32, gd as u32)
}
