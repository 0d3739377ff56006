//! Built-in demo dataset.

use crate::catalog::{Category, CategoryIcon, Product};
use crate::ids::ProductId;
use crate::money::Money;

const PEXELS: &str = "https://images.pexels.com/photos";

fn image(photo: u32) -> String {
    format!("{PEXELS}/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800")
}

fn product(id: u32, name: &str, category: &str, price_cents: i64) -> Product {
    Product::new(ProductId::new(id), name, category, Money::usd(price_cents))
}

/// The twelve demo products, in catalog order.
pub fn products() -> Vec<Product> {
    vec![
        product(1, "Premium Wireless Headphones", "Electronics", 29999)
            .with_original_price(Money::usd(39999))
            .with_rating(4.8, 1234)
            .with_image(image(3587478))
            .with_description("Experience immersive sound quality with active noise cancellation and 30-hour battery life.")
            .trending()
            .featured()
            .with_tags(&["wireless", "noise-canceling", "bluetooth"])
            .with_spec("Battery Life", "30 hours")
            .with_spec("Connectivity", "Bluetooth 5.0")
            .with_spec("Weight", "250g")
            .with_spec("Warranty", "2 years"),
        product(2, "Smart Fitness Watch", "Wearables", 19999)
            .with_original_price(Money::usd(24999))
            .with_rating(4.6, 892)
            .with_image(image(437037))
            .with_description("Track your health and fitness goals with advanced sensors and GPS tracking.")
            .trending()
            .with_tags(&["fitness", "smartwatch", "health"])
            .with_spec("Display", "1.4 inch AMOLED")
            .with_spec("Water Resistance", "5ATM")
            .with_spec("Battery", "7 days")
            .with_spec("Sensors", "Heart rate, SpO2, GPS"),
        product(3, "Professional Camera Lens", "Photography", 89999)
            .with_rating(4.9, 456)
            .with_image(image(90946))
            .with_description("Capture stunning photos with this versatile 24-70mm f/2.8 professional lens.")
            .featured()
            .with_tags(&["photography", "lens", "professional"])
            .with_spec("Focal Length", "24-70mm")
            .with_spec("Aperture", "f/2.8")
            .with_spec("Mount", "Universal")
            .with_spec("Weight", "800g"),
        product(4, "Ergonomic Office Chair", "Furniture", 44999)
            .with_original_price(Money::usd(59999))
            .with_rating(4.7, 678)
            .with_image(image(1957478))
            .with_description("Premium ergonomic design with lumbar support for all-day comfort.")
            .trending()
            .with_tags(&["office", "ergonomic", "furniture"])
            .with_spec("Material", "Mesh & Steel")
            .with_spec("Max Weight", "150kg")
            .with_spec("Adjustable", "Height, Arms, Tilt")
            .with_spec("Warranty", "5 years"),
        product(5, "4K Drone with Camera", "Electronics", 79999)
            .with_rating(4.5, 345)
            .with_image(image(2876511))
            .with_description("Capture breathtaking aerial footage with 4K video and intelligent flight modes.")
            .trending()
            .featured()
            .with_tags(&["drone", "4k", "camera"])
            .with_spec("Camera", "4K 60fps")
            .with_spec("Flight Time", "30 minutes")
            .with_spec("Range", "10km")
            .with_spec("Obstacle Avoidance", "Yes"),
        product(6, "Mechanical Gaming Keyboard", "Gaming", 15999)
            .with_original_price(Money::usd(19999))
            .with_rating(4.8, 1567)
            .with_image(image(2115257))
            .with_description("RGB backlit mechanical keyboard with customizable keys and tactile switches.")
            .trending()
            .with_tags(&["gaming", "rgb", "mechanical"])
            .with_spec("Switch Type", "Mechanical Blue")
            .with_spec("Lighting", "RGB Customizable")
            .with_spec("Connection", "USB-C & Wireless")
            .with_spec("Battery", "40 hours"),
        product(7, "Portable Bluetooth Speaker", "Audio", 12999)
            .with_rating(4.6, 923)
            .with_image(image(1279406))
            .with_description("Waterproof portable speaker with 360-degree sound and 20-hour battery.")
            .with_tags(&["bluetooth", "portable", "waterproof"])
            .with_spec("Power", "40W")
            .with_spec("Battery", "20 hours")
            .with_spec("Waterproof", "IPX7")
            .with_spec("Connectivity", "Bluetooth 5.0"),
        product(8, "Ultra-Wide Gaming Monitor", "Electronics", 59999)
            .with_original_price(Money::usd(79999))
            .with_rating(4.9, 789)
            .with_image(image(2582928))
            .with_description("34-inch curved ultra-wide monitor with 144Hz refresh rate and HDR support.")
            .out_of_stock()
            .trending()
            .featured()
            .with_tags(&["monitor", "gaming", "ultrawide"])
            .with_spec("Size", "34 inches")
            .with_spec("Resolution", "3440x1440")
            .with_spec("Refresh Rate", "144Hz")
            .with_spec("Panel", "VA Curved"),
        product(9, "Smart Home Security Camera", "Smart Home", 17999)
            .with_rating(4.7, 1123)
            .with_image(image(430208))
            .with_description("AI-powered security camera with night vision and motion detection alerts.")
            .trending()
            .with_tags(&["security", "smart-home", "camera"])
            .with_spec("Resolution", "1080p")
            .with_spec("Night Vision", "Yes")
            .with_spec("Storage", "Cloud & Local")
            .with_spec("AI Detection", "Person, Pet, Vehicle"),
        product(10, "Premium Leather Backpack", "Fashion", 14999)
            .with_original_price(Money::usd(19999))
            .with_rating(4.5, 567)
            .with_image(image(2905238))
            .with_description("Handcrafted genuine leather backpack with laptop compartment and multiple pockets.")
            .with_tags(&["leather", "backpack", "fashion"])
            .with_spec("Material", "Genuine Leather")
            .with_spec("Laptop Size", "Up to 15.6 inches")
            .with_spec("Capacity", "25L")
            .with_spec("Pockets", "5 compartments"),
        product(11, "Wireless Charging Pad", "Accessories", 4999)
            .with_rating(4.4, 2134)
            .with_image(image(4526413))
            .with_description("Fast wireless charging for all Qi-enabled devices with LED indicator.")
            .with_tags(&["wireless", "charging", "accessory"])
            .with_spec("Power", "15W Fast Charge")
            .with_spec("Compatibility", "All Qi devices")
            .with_spec("Safety", "Over-charge protection")
            .with_spec("Material", "Aluminum & Glass"),
        product(12, "Professional Espresso Machine", "Kitchen", 69999)
            .with_rating(4.8, 445)
            .with_image(image(324028))
            .with_description("Barista-quality espresso at home with dual boiler system and PID temperature control.")
            .trending()
            .featured()
            .with_tags(&["espresso", "coffee", "kitchen"])
            .with_spec("Boiler", "Dual System")
            .with_spec("Pressure", "15 bar")
            .with_spec("Tank Capacity", "2L")
            .with_spec("Features", "PID Control, Pre-infusion"),
    ]
}

/// Sidebar categories. Counts are display values, kept as published.
pub fn categories() -> Vec<Category> {
    vec![
        Category::new("all", "All Products", CategoryIcon::LayoutGrid, 12),
        Category::new("electronics", "Electronics", CategoryIcon::Laptop, 4),
        Category::new("wearables", "Wearables", CategoryIcon::Watch, 1),
        Category::new("photography", "Photography", CategoryIcon::Camera, 1),
        Category::new("furniture", "Furniture", CategoryIcon::Armchair, 1),
        Category::new("gaming", "Gaming", CategoryIcon::Gamepad, 1),
        Category::new("audio", "Audio", CategoryIcon::Music, 1),
        Category::new("smart-home", "Smart Home", CategoryIcon::Home, 1),
        Category::new("fashion", "Fashion", CategoryIcon::ShoppingBag, 1),
        Category::new("kitchen", "Kitchen", CategoryIcon::Coffee, 1),
    ]
}
