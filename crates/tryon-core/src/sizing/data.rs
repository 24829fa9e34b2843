//! Built-in size conversion data.
//!
//! One row per (category, gender, source brand, source size). Rows are
//! reciprocal: every A→B entry has a B→A entry leading back.

use super::table::Row;
use super::types::Brand::{Adidas, Nike, Zara};
use super::types::Category::{Jackets, Pants, Shoes, Tshirts};
use super::types::Gender::{Female, Male};

#[rustfmt::skip]
pub(super) const BUILTIN_ROWS: &[Row] = &[
    // tshirts
    (Tshirts, Male, Nike, "S", &[(Adidas, "44"), (Zara, "S")]),
    (Tshirts, Male, Nike, "M", &[(Adidas, "46"), (Zara, "M")]),
    (Tshirts, Male, Nike, "L", &[(Adidas, "48"), (Zara, "L")]),
    (Tshirts, Male, Adidas, "44", &[(Nike, "S"), (Zara, "S")]),
    (Tshirts, Male, Adidas, "46", &[(Nike, "M"), (Zara, "M")]),
    (Tshirts, Male, Adidas, "48", &[(Nike, "L"), (Zara, "L")]),
    (Tshirts, Male, Zara, "S", &[(Nike, "S"), (Adidas, "44")]),
    (Tshirts, Male, Zara, "M", &[(Nike, "M"), (Adidas, "46")]),
    (Tshirts, Male, Zara, "L", &[(Nike, "L"), (Adidas, "48")]),
    (Tshirts, Female, Nike, "S", &[(Adidas, "36"), (Zara, "S")]),
    (Tshirts, Female, Nike, "M", &[(Adidas, "38"), (Zara, "M")]),
    (Tshirts, Female, Nike, "L", &[(Adidas, "40"), (Zara, "L")]),
    (Tshirts, Female, Adidas, "36", &[(Nike, "S"), (Zara, "S")]),
    (Tshirts, Female, Adidas, "38", &[(Nike, "M"), (Zara, "M")]),
    (Tshirts, Female, Adidas, "40", &[(Nike, "L"), (Zara, "L")]),
    (Tshirts, Female, Zara, "S", &[(Nike, "S"), (Adidas, "36")]),
    (Tshirts, Female, Zara, "M", &[(Nike, "M"), (Adidas, "38")]),
    (Tshirts, Female, Zara, "L", &[(Nike, "L"), (Adidas, "40")]),
    // pants
    (Pants, Male, Nike, "32", &[(Adidas, "32"), (Zara, "32")]),
    (Pants, Male, Nike, "34", &[(Adidas, "34"), (Zara, "34")]),
    (Pants, Male, Nike, "36", &[(Adidas, "36"), (Zara, "36")]),
    (Pants, Male, Adidas, "32", &[(Nike, "32"), (Zara, "32")]),
    (Pants, Male, Adidas, "34", &[(Nike, "34"), (Zara, "34")]),
    (Pants, Male, Adidas, "36", &[(Nike, "36"), (Zara, "36")]),
    (Pants, Male, Zara, "32", &[(Nike, "32"), (Adidas, "32")]),
    (Pants, Male, Zara, "34", &[(Nike, "34"), (Adidas, "34")]),
    (Pants, Male, Zara, "36", &[(Nike, "36"), (Adidas, "36")]),
    (Pants, Female, Nike, "26", &[(Adidas, "34"), (Zara, "34")]),
    (Pants, Female, Nike, "28", &[(Adidas, "36"), (Zara, "36")]),
    (Pants, Female, Nike, "30", &[(Adidas, "38"), (Zara, "38")]),
    (Pants, Female, Adidas, "34", &[(Nike, "26"), (Zara, "34")]),
    (Pants, Female, Adidas, "36", &[(Nike, "28"), (Zara, "36")]),
    (Pants, Female, Adidas, "38", &[(Nike, "30"), (Zara, "38")]),
    (Pants, Female, Zara, "34", &[(Nike, "26"), (Adidas, "34")]),
    (Pants, Female, Zara, "36", &[(Nike, "28"), (Adidas, "36")]),
    (Pants, Female, Zara, "38", &[(Nike, "30"), (Adidas, "38")]),
    // jackets
    (Jackets, Male, Nike, "M", &[(Adidas, "46"), (Zara, "M")]),
    (Jackets, Male, Nike, "L", &[(Adidas, "48"), (Zara, "L")]),
    (Jackets, Male, Adidas, "46", &[(Nike, "M"), (Zara, "M")]),
    (Jackets, Male, Adidas, "48", &[(Nike, "L"), (Zara, "L")]),
    (Jackets, Male, Zara, "M", &[(Nike, "M"), (Adidas, "46")]),
    (Jackets, Male, Zara, "L", &[(Nike, "L"), (Adidas, "48")]),
    (Jackets, Female, Nike, "S", &[(Adidas, "36"), (Zara, "S")]),
    (Jackets, Female, Nike, "M", &[(Adidas, "38"), (Zara, "M")]),
    (Jackets, Female, Nike, "L", &[(Adidas, "40"), (Zara, "L")]),
    (Jackets, Female, Adidas, "36", &[(Nike, "S"), (Zara, "S")]),
    (Jackets, Female, Adidas, "38", &[(Nike, "M"), (Zara, "M")]),
    (Jackets, Female, Adidas, "40", &[(Nike, "L"), (Zara, "L")]),
    (Jackets, Female, Zara, "S", &[(Nike, "S"), (Adidas, "36")]),
    (Jackets, Female, Zara, "M", &[(Nike, "M"), (Adidas, "38")]),
    (Jackets, Female, Zara, "L", &[(Nike, "L"), (Adidas, "40")]),
    // shoes
    (Shoes, Male, Nike, "8", &[(Adidas, "42"), (Zara, "42")]),
    (Shoes, Male, Nike, "9", &[(Adidas, "43"), (Zara, "43")]),
    (Shoes, Male, Nike, "10", &[(Adidas, "44"), (Zara, "44")]),
    (Shoes, Male, Adidas, "42", &[(Nike, "8"), (Zara, "42")]),
    (Shoes, Male, Adidas, "43", &[(Nike, "9"), (Zara, "43")]),
    (Shoes, Male, Adidas, "44", &[(Nike, "10"), (Zara, "44")]),
    (Shoes, Male, Zara, "42", &[(Nike, "8"), (Adidas, "42")]),
    (Shoes, Male, Zara, "43", &[(Nike, "9"), (Adidas, "43")]),
    (Shoes, Male, Zara, "44", &[(Nike, "10"), (Adidas, "44")]),
    (Shoes, Female, Nike, "6", &[(Adidas, "38"), (Zara, "38")]),
    (Shoes, Female, Nike, "7", &[(Adidas, "39"), (Zara, "39")]),
    (Shoes, Female, Nike, "8", &[(Adidas, "40"), (Zara, "40")]),
    (Shoes, Female, Adidas, "38", &[(Nike, "6"), (Zara, "38")]),
    (Shoes, Female, Adidas, "39", &[(Nike, "7"), (Zara, "39")]),
    (Shoes, Female, Adidas, "40", &[(Nike, "8"), (Zara, "40")]),
    (Shoes, Female, Zara, "38", &[(Nike, "6"), (Adidas, "38")]),
    (Shoes, Female, Zara, "39", &[(Nike, "7"), (Adidas, "39")]),
    (Shoes, Female, Zara, "40", &[(Nike, "8"), (Adidas, "40")]),
];
