use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table, modifiers::UTF8_ROUND_CORNERS,
    presets::UTF8_FULL_CONDENSED,
};
use swapi::PlanetDto;

pub mod cells;
pub mod selection;

pub use selection::Selection;

use cells::{
    count_cell, diameter_cell, gravity_cell, list_cell, name_cell, population_cell,
    rotation_period_cell, surface_water_cell,
};

pub const HEADERS: [&str; 10] = [
    "Name",
    "Climate",
    "Terrain",
    "Gravity",
    "Diameter",
    "Rotation period",
    "Surface water",
    "Population",
    "Residents",
    "Films",
];

const POPULATION_COLUMN: usize = 8;

/// Sum of every known population, `None` when there are no rows at all.
pub fn population_total(planets: &[PlanetDto]) -> Option<f64> {
    if planets.is_empty() {
        return None;
    }

    Some(planets.iter().filter_map(|planet| planet.population).sum())
}

pub fn render(planets: &[PlanetDto], selection: &Selection) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let select_header = if selection.is_all_selected() {
        "[x]"
    } else if selection.is_some_selected() {
        "[-]"
    } else {
        "[ ]"
    };

    let mut header = vec![Cell::new(select_header)];
    header.extend(HEADERS.iter().map(Cell::new));
    table.set_header(header);

    for (index, planet) in planets.iter().enumerate() {
        let mark = if selection.is_selected(index) { "[x]" } else { "[ ]" };
        table.add_row(vec![
            Cell::new(mark),
            Cell::new(name_cell(&planet.name)),
            Cell::new(list_cell(&planet.climate)),
            Cell::new(list_cell(&planet.terrain)),
            Cell::new(gravity_cell(planet.gravity)).set_alignment(CellAlignment::Right),
            Cell::new(diameter_cell(planet.diameter)).set_alignment(CellAlignment::Right),
            Cell::new(rotation_period_cell(planet.rotation_period)),
            Cell::new(surface_water_cell(planet.surface_water)),
            Cell::new(population_cell(planet.population)).set_alignment(CellAlignment::Right),
            Cell::new(count_cell(planet.residents)).set_alignment(CellAlignment::Right),
            Cell::new(count_cell(planet.films)).set_alignment(CellAlignment::Right),
        ]);
    }

    if let Some(total) = population_total(planets) {
        let mut footer: Vec<Cell> = (0..=HEADERS.len()).map(|_| Cell::new("")).collect();
        footer[0] = Cell::new("Total");
        footer[POPULATION_COLUMN] =
            Cell::new(population_cell(Some(total))).set_alignment(CellAlignment::Right);
        table.add_row(footer);
    }

    table
}
