//! Reference data for the nine planetary deities (navagraha).

use crate::models::CreateDeityRequest;

struct Graha {
    name: &'static str,
    sanskrit_name: &'static str,
    description: &'static str,
    day_of_week: &'static str,
    color: &'static str,
    gemstone: &'static str,
    metal: &'static str,
    element: &'static str,
    direction: &'static str,
}

const GRAHAS: [Graha; 9] = [
    Graha {
        name: "Surya (Sun)",
        sanskrit_name: "सूर्य",
        description: "The Sun god, source of light and life. Represents the soul, vitality, and leadership qualities.",
        day_of_week: "Sunday",
        color: "Golden Red",
        gemstone: "Ruby",
        metal: "Gold",
        element: "Fire",
        direction: "East",
    },
    Graha {
        name: "Chandra (Moon)",
        sanskrit_name: "चन्द्र",
        description: "The Moon god, ruler of emotions and mind. Represents intuition, creativity, and maternal energy.",
        day_of_week: "Monday",
        color: "White",
        gemstone: "Pearl",
        metal: "Silver",
        element: "Water",
        direction: "Northwest",
    },
    Graha {
        name: "Mangal (Mars)",
        sanskrit_name: "मंगल",
        description: "The Mars god, planet of energy and action. Represents courage, strength, and determination.",
        day_of_week: "Tuesday",
        color: "Red",
        gemstone: "Red Coral",
        metal: "Copper",
        element: "Fire",
        direction: "South",
    },
    Graha {
        name: "Budh (Mercury)",
        sanskrit_name: "बुध",
        description: "The Mercury god, planet of communication and intellect. Represents wisdom, learning, and business.",
        day_of_week: "Wednesday",
        color: "Green",
        gemstone: "Emerald",
        metal: "Bronze",
        element: "Earth",
        direction: "North",
    },
    Graha {
        name: "Guru (Jupiter)",
        sanskrit_name: "गुरु",
        description: "The Jupiter god, planet of wisdom and spirituality. Represents knowledge, teaching, and prosperity.",
        day_of_week: "Thursday",
        color: "Yellow",
        gemstone: "Yellow Sapphire",
        metal: "Gold",
        element: "Space",
        direction: "Northeast",
    },
    Graha {
        name: "Shukra (Venus)",
        sanskrit_name: "शुक्र",
        description: "The Venus god, planet of love and beauty. Represents relationships, art, and material pleasures.",
        day_of_week: "Friday",
        color: "White",
        gemstone: "Diamond",
        metal: "Silver",
        element: "Water",
        direction: "Southeast",
    },
    Graha {
        name: "Shani (Saturn)",
        sanskrit_name: "शनि",
        description: "The Saturn god, planet of discipline and karma. Represents hard work, patience, and life lessons.",
        day_of_week: "Saturday",
        color: "Black",
        gemstone: "Blue Sapphire",
        metal: "Iron",
        element: "Air",
        direction: "West",
    },
    Graha {
        name: "Rahu (North Node)",
        sanskrit_name: "राहु",
        description: "The shadow planet representing desires and illusions. Brings sudden changes and material gains.",
        day_of_week: "Saturday",
        color: "Smoky",
        gemstone: "Hessonite",
        metal: "Lead",
        element: "Air",
        direction: "Southwest",
    },
    Graha {
        name: "Ketu (South Node)",
        sanskrit_name: "केतु",
        description: "The shadow planet representing spirituality and detachment. Brings wisdom and liberation.",
        day_of_week: "Tuesday",
        color: "Brown",
        gemstone: "Cat's Eye",
        metal: "Iron",
        element: "Fire",
        direction: "Northwest",
    },
];

/// Names of the seeded grahas, used to detect an earlier seed.
pub fn graha_names() -> Vec<&'static str> {
    GRAHAS.iter().map(|g| g.name).collect()
}

/// Create requests for all nine grahas, Surya first.
pub fn grahas() -> Vec<CreateDeityRequest> {
    GRAHAS
        .iter()
        .map(|g| CreateDeityRequest {
            name: g.name.to_string(),
            description: Some(g.description.to_string()),
            sanskrit_name: Some(g.sanskrit_name.to_string()),
            day_of_week: Some(g.day_of_week.to_string()),
            color: Some(g.color.to_string()),
            gemstone: Some(g.gemstone.to_string()),
            metal: Some(g.metal.to_string()),
            element: Some(g.element.to_string()),
            direction: Some(g.direction.to_string()),
            image_url: None,
            is_active: true,
        })
        .collect()
}
