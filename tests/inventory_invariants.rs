//! Property tests over the resource inventory: no sequence of commits and
//! status updates may ever drive an available quantity negative, and a
//! refused commit must leave its category untouched.

use drs_core::config::DrsConfig;
use drs_core::inventory::ResourceInventory;
use drs_core::models::ResourceStatus;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Commit { category: usize, quantity: u32 },
    Release { category: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..3, 0u32..30).prop_map(|(category, quantity)| Op::Commit { category, quantity }),
        (0usize..3).prop_map(|category| Op::Release { category }),
    ]
}

proptest! {
    #[test]
    fn commits_never_underflow_and_refusals_do_not_mutate(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let config = DrsConfig::default();
        let mut inventory = ResourceInventory::from_config(&config);
        let names: Vec<String> = config.catalog.iter().map(|c| c.name.clone()).collect();

        for op in ops {
            match op {
                Op::Commit { category, quantity } => {
                    let name = &names[category];
                    let before = inventory
                        .find_available_by_name(name)
                        .map(|r| r.available_quantity);

                    let committed = inventory.commit(name, quantity, "Fire");

                    match (before, committed) {
                        (Some(available), Some(snapshot)) => {
                            prop_assert!(quantity <= available);
                            prop_assert_eq!(snapshot.available_quantity, available - quantity);
                            prop_assert_eq!(snapshot.allocated_quantity, quantity);
                        }
                        (Some(available), None) => {
                            // Refused: shortfall, and the category is untouched.
                            prop_assert!(quantity > available);
                            let after = inventory.find_available_by_name(name).unwrap();
                            prop_assert_eq!(after.available_quantity, available);
                        }
                        (None, committed) => {
                            // No available category with this name; commit
                            // must refuse.
                            prop_assert!(committed.is_none());
                        }
                    }
                }
                Op::Release { category } => {
                    let id = inventory
                        .list_all()
                        .into_iter()
                        .find(|r| r.name == names[category])
                        .map(|r| r.id);
                    if let Some(id) = id {
                        inventory.update_status(id, ResourceStatus::Available);
                    }
                }
            }

            // u32 cannot encode a negative, so the invariant here is that no
            // operation panics on underflow and totals stay within the
            // starting pool.
            for (resource, entry) in inventory.list_all().iter().zip(&config.catalog) {
                prop_assert!(resource.available_quantity <= entry.starting_quantity);
            }
        }
    }
}
