use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::task::{AbortHandle, JoinHandle};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::domain::pricing::CustomerGroup;
use crate::domain::ports::PricingRepository;

use super::aggregator::aggregate;
use super::formatter::format_price_groups;
use super::search::{filter, split_paragraphs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
pub struct GroupsView {
    pub groups: Vec<CustomerGroup>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PriceView {
    pub group_id: Option<u32>,
    pub status: SurfaceStatus,
    pub blocks: Vec<String>,
    pub notice: Option<String>,
}

/// The price listing on screen. Only the fetch whose generation is still
/// current may write to it.
struct Surface {
    generation: u64,
    group_id: Option<u32>,
    status: SurfaceStatus,
    text: String,
    notice: Option<String>,
    in_flight: Option<AbortHandle>,
}

impl Surface {
    fn new() -> Self {
        Self {
            generation: 0,
            group_id: None,
            status: SurfaceStatus::Idle,
            text: String::new(),
            notice: None,
            in_flight: None,
        }
    }

    /// Returns false when a newer selection has superseded `generation`.
    fn publish(
        &mut self,
        generation: u64,
        group_id: u32,
        outcome: Result<String, DomainError>,
    ) -> bool {
        if generation != self.generation {
            log::info!(
                "Discarding prices for group {} (generation {} superseded by {})",
                group_id,
                generation,
                self.generation
            );
            return false;
        }
        match outcome {
            Ok(text) => {
                self.status = SurfaceStatus::Ready;
                self.text = text;
                self.notice = None;
            }
            Err(e) => {
                log::error!("Failed to fetch prices for group {}: {}", group_id, e);
                self.status = SurfaceStatus::Failed;
                self.text.clear();
                self.notice = Some(format!(
                    "No se pudo conectar a la base de datos:\n{}",
                    notice_message(&e)
                ));
            }
        }
        self.in_flight = None;
        true
    }
}

/// Customer group price screen.
pub struct PricingBrowser {
    repo: Arc<dyn PricingRepository>,
    surface: Arc<Mutex<Surface>>,
}

impl PricingBrowser {
    pub fn new(repo: Arc<dyn PricingRepository>) -> Self {
        Self {
            repo,
            surface: Arc::new(Mutex::new(Surface::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Surface> {
        lock_surface(&self.surface)
    }

    /// Blocking.
    pub fn groups(&self) -> GroupsView {
        match self.repo.fetch_groups() {
            Ok(groups) => GroupsView {
                groups,
                notice: None,
            },
            Err(e) => {
                log::error!("Failed to fetch customer groups: {}", e);
                GroupsView {
                    groups: Vec::new(),
                    notice: Some(format!(
                        "No se pudo conectar a la base de datos:\n{}",
                        notice_message(&e)
                    )),
                }
            }
        }
    }

    /// Start loading `group_id` in the background, superseding any fetch
    /// still running. Must be called from within a Tokio runtime.
    pub fn select_group(&self, group_id: u32) -> JoinHandle<()> {
        let mut surface = self.lock();
        surface.generation += 1;
        let generation = surface.generation;
        if let Some(previous) = surface.in_flight.take() {
            previous.abort();
        }
        surface.group_id = Some(group_id);
        surface.status = SurfaceStatus::Loading;
        surface.text.clear();
        surface.notice = None;

        let repo = Arc::clone(&self.repo);
        let shared = Arc::clone(&self.surface);
        let handle = tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || -> Result<String, DomainError> {
                let observations = repo.fetch_price_observations(group_id)?;
                Ok(format_price_groups(&aggregate(observations)))
            })
            .await
            .unwrap_or_else(|e| Err(DomainError::DataSource(format!("price worker failed: {e}"))));

            lock_surface(&shared).publish(generation, group_id, outcome);
        });
        surface.in_flight = Some(handle.abort_handle());
        log::debug!("Loading prices for group {} (generation {})", group_id, generation);
        handle
    }

    /// Current listing, split in paragraphs and filtered by `query`.
    pub fn view(&self, query: &str) -> PriceView {
        let surface = self.lock();
        let paragraphs = split_paragraphs(&surface.text);
        PriceView {
            group_id: surface.group_id,
            status: surface.status,
            blocks: filter(&paragraphs, query)
                .into_iter()
                .map(str::to_string)
                .collect(),
            notice: surface.notice.clone(),
        }
    }
}

fn lock_surface(surface: &Mutex<Surface>) -> MutexGuard<'_, Surface> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}

fn notice_message(e: &DomainError) -> String {
    match e {
        DomainError::DataSource(msg) => msg.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::mpsc;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::pricing::PriceObservation;

    #[derive(Default)]
    struct FakePricing {
        fail: bool,
        gate: Mutex<Option<(u32, mpsc::Receiver<()>)>>,
    }

    fn observation(reference: &str, name: &str, price: Option<&str>) -> PriceObservation {
        PriceObservation {
            product_id: 1,
            product_name: name.to_string(),
            effective_reference: Some(reference.to_string()),
            price: price.map(|p| BigDecimal::from_str(p).expect("valid decimal")),
        }
    }

    impl PricingRepository for FakePricing {
        fn fetch_groups(&self) -> Result<Vec<CustomerGroup>, DomainError> {
            if self.fail {
                return Err(DomainError::DataSource("Unknown database 'shop'".to_string()));
            }
            Ok(vec![
                CustomerGroup {
                    id: 1,
                    name: "Visitante".to_string(),
                },
                CustomerGroup {
                    id: 3,
                    name: "Cliente".to_string(),
                },
            ])
        }

        fn fetch_price_observations(
            &self,
            group_id: u32,
        ) -> Result<Vec<PriceObservation>, DomainError> {
            let gate = {
                let mut gate = self.gate.lock().expect("lock");
                if matches!(gate.as_ref(), Some((gated, _)) if *gated == group_id) {
                    gate.take()
                } else {
                    None
                }
            };
            if let Some((_, rx)) = gate {
                let _ = rx.recv();
            }
            if self.fail {
                return Err(DomainError::DataSource("timeout".to_string()));
            }
            Ok(vec![
                observation(&format!("G{group_id}-A"), "Camiseta", Some("10")),
                observation(&format!("G{group_id}-B"), "Café molido", None),
                observation(&format!("G{group_id}-A"), "Camiseta", Some("12.5")),
            ])
        }
    }

    #[test]
    fn groups_failure_yields_empty_list_and_notice() {
        let browser = PricingBrowser::new(Arc::new(FakePricing {
            fail: true,
            ..Default::default()
        }));
        let view = browser.groups();
        assert!(view.groups.is_empty());
        assert_eq!(
            view.notice.as_deref(),
            Some("No se pudo conectar a la base de datos:\nUnknown database 'shop'")
        );
    }

    #[test]
    fn surface_starts_idle() {
        let browser = PricingBrowser::new(Arc::new(FakePricing::default()));
        let view = browser.view("");
        assert_eq!(view.status, SurfaceStatus::Idle);
        assert!(view.blocks.is_empty());
        assert!(view.group_id.is_none());
    }

    #[tokio::test]
    async fn selected_group_renders_paragraphs() {
        let browser = PricingBrowser::new(Arc::new(FakePricing::default()));
        browser.select_group(3).await.expect("fetch task");

        let view = browser.view("");
        assert_eq!(view.status, SurfaceStatus::Ready);
        assert_eq!(view.group_id, Some(3));
        assert_eq!(
            view.blocks,
            vec![
                "Referencia: G3-A - Camiseta\nPrecio: 10.00 €\nPrecio: 12.50 €".to_string(),
                "Referencia: G3-B - Café molido\nPrecio: N/A".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn view_filters_cached_listing() {
        let browser = PricingBrowser::new(Arc::new(FakePricing::default()));
        browser.select_group(1).await.expect("fetch task");

        let view = browser.view("CAFE");
        assert_eq!(view.blocks.len(), 1);
        assert!(view.blocks[0].starts_with("Referencia: G1-B - Café molido"));
    }

    #[tokio::test]
    async fn failed_fetch_sets_notice() {
        let browser = PricingBrowser::new(Arc::new(FakePricing {
            fail: true,
            ..Default::default()
        }));
        browser.select_group(1).await.expect("fetch task");

        let view = browser.view("");
        assert_eq!(view.status, SurfaceStatus::Failed);
        assert!(view.blocks.is_empty());
        assert_eq!(
            view.notice.as_deref(),
            Some("No se pudo conectar a la base de datos:\ntimeout")
        );
    }

    #[tokio::test]
    async fn newer_selection_supersedes_slow_fetch() {
        let (tx, rx) = mpsc::channel();
        let browser = PricingBrowser::new(Arc::new(FakePricing {
            fail: false,
            gate: Mutex::new(Some((1, rx))),
        }));

        let slow = browser.select_group(1);
        let fast = browser.select_group(2);
        fast.await.expect("fetch task");
        let _ = tx.send(());
        let slow_result = slow.await;
        assert!(slow_result.is_err_and(|e| e.is_cancelled()));

        let view = browser.view("");
        assert_eq!(view.group_id, Some(2));
        assert_eq!(view.status, SurfaceStatus::Ready);
        assert!(view.blocks.iter().all(|b| b.contains("G2-")));
    }

    #[test]
    fn stale_generation_is_not_published() {
        let mut surface = Surface::new();
        surface.generation = 2;
        surface.group_id = Some(2);
        surface.status = SurfaceStatus::Loading;

        assert!(!surface.publish(1, 1, Ok("Referencia: old - x\n\n".to_string())));
        assert_eq!(surface.status, SurfaceStatus::Loading);
        assert!(surface.text.is_empty());

        assert!(surface.publish(2, 2, Ok("Referencia: new - y\n\n".to_string())));
        assert_eq!(surface.status, SurfaceStatus::Ready);
        assert_eq!(surface.text, "Referencia: new - y\n\n");
    }
}
