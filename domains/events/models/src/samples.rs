use crate::NewEvent;

// title, description, category, date, time, location
const SAMPLES: [(&str, &str, &str, &str, &str, &str); 10] = [
    (
        "Noche de Jazz en Vivo",
        "Disfruta de una noche inolvidable con los mejores músicos de jazz de la ciudad. Incluye copa de bienvenida.",
        "music",
        "2025-07-20",
        "21:00",
        "Jazz Bar La Cava",
    ),
    (
        "Festival de Rock Underground",
        "Las mejores bandas emergentes de rock alternativo. ¡No te lo pierdas!",
        "music",
        "2025-07-25",
        "18:00",
        "Arena Norte",
    ),
    (
        "Concierto Sinfónico",
        "La orquesta filarmónica presenta obras clásicas de Mozart y Beethoven.",
        "music",
        "2025-07-28",
        "19:30",
        "Teatro Principal",
    ),
    (
        "Limpieza de Playa",
        "Únete a nuestra jornada de limpieza ecológica. Incluye desayuno y camiseta.",
        "volunteer",
        "2025-07-22",
        "07:00",
        "Playa del Sol",
    ),
    (
        "Reforestación Comunitaria",
        "Planta un árbol y ayuda al medio ambiente. Todas las herramientas incluidas.",
        "volunteer",
        "2025-07-26",
        "09:00",
        "Bosque Municipal",
    ),
    (
        "Comedor Social",
        "Ayuda a servir comidas a personas necesitadas. Tu tiempo hace la diferencia.",
        "volunteer",
        "2025-07-21",
        "12:00",
        "Centro Comunitario",
    ),
    (
        "Food Truck Festival",
        "Los mejores food trucks de la ciudad en un solo lugar. Música en vivo incluida.",
        "general",
        "2025-07-24",
        "12:00",
        "Parque Central",
    ),
    (
        "Networking Tech",
        "Conecta con profesionales del mundo tecnológico. Charlas y networking.",
        "general",
        "2025-07-23",
        "18:30",
        "Hub de Innovación",
    ),
    (
        "Mercado Artesanal",
        "Descubre productos únicos hechos a mano por artesanos locales.",
        "general",
        "2025-07-27",
        "10:00",
        "Plaza Mayor",
    ),
    (
        "Clase de Yoga al Aire Libre",
        "Relájate y conecta con tu cuerpo en esta sesión de yoga gratuita.",
        "general",
        "2025-07-20",
        "08:00",
        "Jardín Botánico",
    ),
];

/// The demo catalog loaded by the seed operation, in insertion order
pub fn sample_events() -> Vec<NewEvent> {
    SAMPLES
        .iter()
        .map(|(title, description, category, date, time, location)| {
            NewEvent::builder()
                .title(*title)
                .description(*description)
                .category(*category)
                .date(*date)
                .time(*time)
                .location(*location)
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KNOWN_CATEGORIES;

    #[test]
    fn ten_samples_in_known_categories() {
        let samples = sample_events();
        assert_eq!(samples.len(), 10);
        assert!(
            samples
                .iter()
                .all(|e| KNOWN_CATEGORIES.contains(&e.category.as_str()))
        );
        assert_eq!(samples.iter().filter(|e| e.category == "music").count(), 3);
        let volunteer =
            samples.iter().filter(|e| e.category == "volunteer").count();
        assert_eq!(volunteer, 3);
        assert_eq!(samples[0].title, "Noche de Jazz en Vivo");
    }
}
