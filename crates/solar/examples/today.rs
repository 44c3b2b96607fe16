//! Sunrise, sunset and twilight for a few cities, right now.
//!
//! Run with: cargo run -p solar --example today

use solar::prelude::*;

fn main() {
    let cities = [
        ("Cupertino", GeoCoordinate::new_unchecked(37.334606, -122.009102)),
        ("London", GeoCoordinate::new_unchecked(51.5074, -0.1278)),
        ("Jakarta", GeoCoordinate::new_unchecked(-6.2088, 106.8456)),
        ("Longyearbyen", GeoCoordinate::new_unchecked(78.2232, 15.6267)),
    ];

    let now = SystemClock.now();
    println!("=====================================");
    println!("  Now: {}", now.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("=====================================");

    for (name, coord) in cities {
        println!();
        println!("  {} ({})", name, coord);

        for zenith in Zenith::ALL {
            match DayPrediction::for_location(now, &coord, zenith) {
                Some(p) => println!(
                    "    {:<22} {} -> {}  [{}]",
                    zenith.to_string(),
                    p.sunrise().format("%m-%d %H:%M:%S"),
                    p.sunset().format("%m-%d %H:%M:%S"),
                    if p.is_daytime() { "day" } else { "night" },
                ),
                None => println!("    {:<22} no crossing today", zenith.to_string()),
            }
        }
    }
}
