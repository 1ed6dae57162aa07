use std::collections::HashMap;

use crate::domain::pricing::{PriceObservation, PriceReferenceGroup};

/// Group observations by effective reference in first-seen order.
///
/// Every price is kept, `None` and duplicates included. A row without any
/// reference is grouped under the empty key rather than dropped.
pub fn aggregate(observations: Vec<PriceObservation>) -> Vec<PriceReferenceGroup> {
    let mut groups: Vec<PriceReferenceGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for obs in observations {
        let reference = match obs.effective_reference {
            Some(reference) => reference,
            None => {
                log::warn!(
                    "product {} ({}) has no reference, grouping under empty key",
                    obs.product_id,
                    obs.product_name
                );
                String::new()
            }
        };

        let idx = *positions.entry(reference.clone()).or_insert_with(|| {
            groups.push(PriceReferenceGroup {
                effective_reference: reference,
                product_name: obs.product_name,
                prices: Vec::new(),
            });
            groups.len() - 1
        });
        groups[idx].prices.push(obs.price);
    }

    groups
}
