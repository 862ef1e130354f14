// fixtures/products.rs
//
// Realistic electronics records shaped like the FakeStore API responses.

use rust_decimal::Decimal;

use crate::web_app::model::{Product, ProductId, Rating};

fn product(
    id: ProductId,
    title: &str,
    price: Decimal,
    description: &str,
    rate: f64,
    count: u32,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: description.to_string(),
        image: format!("https://fakestoreapi.com/img/{}.jpg", id),
        category: "electronics".to_string(),
        rating: Rating { rate, count },
    }
}

/// A single generic electronics product with the given identifier
pub fn sample_product(id: ProductId) -> Product {
    product(
        id,
        &format!("Sample Device {}", id),
        Decimal::new(10995, 2),
        "A dependable gadget for everyday use",
        4.1,
        120,
    )
}

/// The two-record collection used by the filtering examples
pub fn phone_and_cable() -> Vec<Product> {
    vec![
        product(1, "Phone", Decimal::new(19999, 2), "smart device", 4.5, 10),
        product(2, "Cable", Decimal::new(999, 2), "usb phone cable", 3.9, 42),
    ]
}

/// The electronics category as the demo API serves it (abridged)
pub fn electronics_catalogue() -> Vec<Product> {
    vec![
        product(
            9,
            "WD 2TB Elements Portable External Hard Drive - USB 3.0",
            Decimal::new(64, 0),
            "USB 3.0 and USB 2.0 compatibility Fast data transfers Improve PC Performance High Capacity",
            3.3,
            203,
        ),
        product(
            10,
            "SanDisk SSD PLUS 1TB Internal SSD - SATA III 6 Gb/s",
            Decimal::new(109, 0),
            "Easy upgrade for faster boot up, shutdown, application load and response",
            2.9,
            470,
        ),
        product(
            11,
            "Silicon Power 256GB SSD 3D NAND A55 SLC Cache Performance Boost SATA III 2.5",
            Decimal::new(109, 0),
            "3D NAND flash are applied to deliver high transfer speeds",
            4.8,
            319,
        ),
        product(
            12,
            "WD 4TB Gaming Drive Works with Playstation 4 Portable External Hard Drive",
            Decimal::new(114, 0),
            "Expand your PS4 gaming experience, Play anywhere Fast and easy, setup",
            4.8,
            400,
        ),
        product(
            13,
            "Acer SB220Q bi 21.5 inches Full HD (1920 x 1080) IPS Ultra-Thin",
            Decimal::new(599, 0),
            "21. 5 inches Full HD (1920 x 1080) widescreen IPS display",
            2.9,
            250,
        ),
        product(
            14,
            "Samsung 49-Inch CHG90 144Hz Curved Gaming Monitor (LC49HG90DMNXZA) - Super Ultrawide Screen QLED",
            Decimal::new(99999, 2),
            "49 INCH SUPER ULTRAWIDE 32:9 CURVED GAMING MONITOR with dual 27 inch screen side by side",
            2.2,
            140,
        ),
    ]
}
