// ABOUTME: Display unit table for nutrient keys
// ABOUTME: Static mapping from nutrient key to its unit string (kcal, g, mg, μg, ...)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

use crate::constants::nutrient_keys;

/// Display unit for every known nutrient key.
///
/// Micronutrient keys use the Japanese names of the dietary reference intakes,
/// which are also the keys of the bundled reference dataset.
pub const NUTRIENT_UNITS: [(&str, &str); 33] = [
    (nutrient_keys::ENERGY, "kcal"),
    (nutrient_keys::PROTEIN, "g"),
    (nutrient_keys::FAT, "g"),
    (nutrient_keys::CARBOHYDRATE, "g"),
    ("ビタミンA", "μgRAE"),
    ("ビタミンD", "μg"),
    ("ビタミンE", "mg"),
    ("ビタミンK", "μg"),
    ("ビタミンB1", "mg"),
    ("ビタミンB2", "mg"),
    ("ナイアシン", "mgNE"),
    ("ビタミンB6", "mg"),
    ("ビタミンB12", "μg"),
    ("葉酸", "μg"),
    ("パントテン酸", "mg"),
    ("ビオチン", "μg"),
    ("ビタミンC", "mg"),
    ("ナトリウム", "g"),
    ("カリウム", "mg"),
    ("カルシウム", "mg"),
    ("マグネシウム", "mg"),
    ("リン", "mg"),
    ("鉄", "mg"),
    ("亜鉛", "mg"),
    ("銅", "mg"),
    ("マンガン", "mg"),
    ("ヨウ素", "μg"),
    ("セレン", "μg"),
    ("クロム", "μg"),
    ("モリブデン", "μg"),
    ("コレステロール", "mg"),
    ("食物繊維", "g"),
    ("食塩相当量", "g"),
];

/// Unit for `key`, if the key is mapped
#[must_use]
pub fn unit_for(key: &str) -> Option<&'static str> {
    NUTRIENT_UNITS
        .iter()
        .find(|(nutrient, _)| *nutrient == key)
        .map(|(_, unit)| *unit)
}
