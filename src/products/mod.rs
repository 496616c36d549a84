//! The built-in product catalog.

mod common;
mod frame;

macro_rules! catalog {
    ($($module:ident::$product:ident),+ $(,)?) => {
        $(mod $module;)+

        /// Every built-in product, in catalog order.
        pub(crate) fn all() -> Vec<Box<dyn crate::Product>> {
            vec![$(Box::new($module::$product)),+]
        }
    };
}

catalog! {
    test_kit::TestKit,
    triangle_desk::TriangleDesk,
    baby_chair::BabyChair,
    baby_gym::BabyGym,
    baby_learning_tower::BabyLearningTower,
    bed_frame::BedFrame,
    bench::Bench,
    bench_seat::BenchSeat,
    bike_rack::BikeRack,
    cat_castle::CatCastle,
    cat_shelves::CatShelves,
    cat_tree::CatTree,
    cesca_chair::CescaChair,
    chair::Chair,
    clothes_rack::ClothesRack,
    coat_rack::CoatRack,
    coffee_table::CoffeeTable,
    console_table::ConsoleTable,
    garage_workbench::GarageWorkbench,
    hanging_shelves::HangingShelves,
    kid_fort::KidFort,
    ladder::Ladder,
    ladder_shelf::LadderShelf,
    lumber_rack::LumberRack,
    makers_desk::MakersDesk,
    makers_workbench::MakersWorkbench,
    shelf_tower::ShelfTower,
    shelving_unit::ShelvingUnit,
    shoe_rack::ShoeRack,
    side_table::SideTable,
    sign_board::SignBoard,
    stage::Stage,
    step_stool::StepStool,
    stilts::Stilts,
    super_table::SuperTable,
    utility_workbench::UtilityWorkbench,
    wall_shelf::WallShelf,
    wall_shelves_horizontal::WallShelvesHorizontal,
    wall_shelves_vertical::WallShelvesVertical,
    wardrobe_organizer::WardrobeOrganizer,
    work_table::WorkTable,
}

/// Build a product's flattened, validated parts from a preset (or the schema
/// defaults when `preset` is empty).
#[cfg(test)]
pub(crate) fn build(product: &dyn crate::Product, preset: &str) -> Vec<gridparts::Part> {
    build_with(product, preset, &[])
}

/// Like [`build`], with some values overridden.
#[cfg(test)]
pub(crate) fn build_with(
    product: &dyn crate::Product,
    preset: &str,
    overrides: &[(&str, crate::ParamValue)],
) -> Vec<gridparts::Part> {
    let schema = product.parameters();
    let mut values = schema.defaults();
    if !preset.is_empty() {
        let preset = product
            .presets()
            .into_iter()
            .find(|p| p.id == preset)
            .unwrap_or_else(|| panic!("{} has no preset {preset}", product.id()));
        values.extend(preset.values.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    for (key, value) in overrides {
        let (id, value) = schema.normalize(key, value.clone()).expect("override should name a parameter");
        values.insert(id, value);
    }
    schema.validate(&values).expect("values should be valid");

    let parts = gridparts::into_flat(product.parts(&values).expect("parts should build"));
    for part in &parts {
        if let Err(err) = part.validate() {
            panic!("{}: invalid part {part:?}: {err}", product.id());
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let products = all();
        let ids: BTreeSet<&str> = products.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), products.len());
        assert_eq!(products.len(), 41);
    }

    #[test]
    fn test_every_preset_builds() {
        for product in all() {
            let presets = product.presets();
            if presets.is_empty() {
                build(product.as_ref(), "");
            }
            for preset in presets {
                let parts = build(product.as_ref(), &preset.id);
                assert!(
                    !parts.is_empty() || product.id() == "baby-gym",
                    "{}/{} built nothing",
                    product.id(),
                    preset.id
                );
            }
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        for product in all() {
            let schema = product.parameters();
            let defaults = schema.defaults();
            assert_eq!(schema.validate(&defaults).ok(), Some(()), "{}", product.id());
        }
    }

    #[test]
    fn test_short_ids_are_unique() {
        for product in all() {
            let schema = product.parameters();
            let shorts: BTreeSet<&str> = schema.iter().map(|p| p.short_id.as_str()).collect();
            assert_eq!(shorts.len(), schema.len(), "{}", product.id());
        }
    }
}
