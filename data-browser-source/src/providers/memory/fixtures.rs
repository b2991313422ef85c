//! Deterministic demo data shaped like the public `users` / `products` collections.

use serde_json::json;

use crate::types::Record;

const FIRST_NAMES: &[&str] = &[
    "Emily", "Michael", "Sophia", "James", "Emma", "Olivia", "Alexander", "Ava", "Ethan",
    "Isabella", "Liam", "Mia", "Noah", "Charlotte", "Ann", "Lucas", "Amelia", "Mason", "Harper",
    "Logan", "Evelyn", "Bo", "Abigail", "Jackson",
];

const LAST_NAMES: &[&str] = &[
    "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Lee", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Ann", "Martin", "Jackson",
];

const BLOOD_GROUPS: &[&str] = &["O-", "O+", "A-", "A+", "B-", "B+", "AB-", "AB+"];
const EYE_COLORS: &[&str] = &["Green", "Brown", "Gray", "Blue", "Amber", "Hazel"];

const USER_COUNT: usize = 47;
const PRODUCT_COUNT: usize = 60;

pub(super) fn users() -> Vec<Record> {
    (0..USER_COUNT)
        .filter_map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i * 7) % LAST_NAMES.len()];
            let maiden = LAST_NAMES[(i * 3 + 5) % LAST_NAMES.len()];
            let gender = if i % 2 == 0 { "female" } else { "male" };
            let age = 18 + (i * 13) % 50;
            Record::from_value(json!({
                "id": i + 1,
                "firstName": first,
                "lastName": last,
                "maidenName": maiden,
                "age": age,
                "gender": gender,
                "email": format!("{}.{}@x.dummyjson.com", first.to_lowercase(), last.to_lowercase()),
                "phone": format!("+1 555-{:03}-{:04}", 100 + i, (i * 379) % 10_000),
                "username": format!("{}{}", first.to_lowercase(), i + 1),
                "birthDate": format!("{}-{}-{}", 2024 - age, 1 + i % 12, 1 + (i * 5) % 28),
                "bloodGroup": BLOOD_GROUPS[i % BLOOD_GROUPS.len()],
                "eyeColor": EYE_COLORS[i % EYE_COLORS.len()],
            }))
        })
        .collect()
}

const CATEGORIES: &[(&str, &[&str], &[&str])] = &[
    ("beauty", &["Essence", "Glamour Beauty", "Velvet Touch"], &["Mascara", "Eyeshadow Palette", "Powder Canister", "Red Lipstick"]),
    ("fragrances", &["Calvin Klein", "Chanel", "Dior"], &["CK One", "Coco Noir", "J'adore", "Eau de Parfum"]),
    ("furniture", &["Annibale Colombo", "Furniture Co.", "Knoll"], &["Bed", "Sofa", "Bedside Table", "Office Chair"]),
    ("groceries", &["Fresh Farms", "Green Valley"], &["Apple", "Beef Steak", "Cat Food", "Chicken Meat"]),
    ("smartphones", &["Apple", "Samsung", "Oppo"], &["iPhone 9", "Galaxy S8", "F19 Pro", "Reno 6"]),
    ("laptops", &["Apple", "Asus", "Lenovo", "Huawei"], &["MacBook Pro 14", "Zenbook Pro", "Yoga 920", "Matebook X Pro"]),
];

#[allow(clippy::cast_precision_loss)]
pub(super) fn products() -> Vec<Record> {
    (0..PRODUCT_COUNT)
        .filter_map(|i| {
            let (category, brands, titles) = CATEGORIES[i % CATEGORIES.len()];
            let brand = brands[(i / CATEGORIES.len()) % brands.len()];
            let title = titles[(i / CATEGORIES.len()) % titles.len()];
            let price = 4.99 + ((i * 37) % 200) as f64 * 5.0;
            let rating = 2.5 + ((i * 11) % 25) as f64 / 10.0;
            Record::from_value(json!({
                "id": i + 1,
                "title": title,
                "brand": brand,
                "category": category,
                "price": price,
                "rating": rating,
                "stock": (i * 17) % 120,
                "discountPercentage": ((i * 7) % 20) as f64 + 0.5,
            }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_sequential() {
        let users = users();
        assert_eq!(users.len(), USER_COUNT);
        for (i, user) in users.iter().enumerate() {
            assert_eq!(user.text("id"), Some((i + 1).to_string()));
        }
    }

    #[test]
    fn products_cover_laptops() {
        let laptops = products()
            .into_iter()
            .filter(|p| p.text("category").as_deref() == Some("laptops"))
            .count();
        assert_eq!(laptops, PRODUCT_COUNT / CATEGORIES.len());
    }
}
