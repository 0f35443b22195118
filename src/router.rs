use std::collections::HashSet;
use std::io::Read;
use std::sync::Mutex;

use astra::Request;
use maud::Markup;
use tracing::{debug, info, warn};

use crate::auth::sessions::{load_user_from_session, session_cookie};
use crate::auth::token::secret_matches;
use crate::auth::{Access, AccessGate, Identity};
use crate::config::Config;
use crate::db::{now_unix, CustomerStore, Database, WebLeadStore, ZoneStore};
use crate::domain::{Customer, WebLead, WebLeadDraft, WebLeadFields, Zone};
use crate::errors::ServerError;
use crate::lfpe::{
    CommitOutcome, EditError, EditSession, Entity, EntityStore, FilterState, StatusKind,
    StoreError, ViewController,
};
use crate::navigation::Section;
use crate::responses::{
    html_response, html_response_with_status, json_response, see_other, stylesheet_response,
    ResultResp,
};
use crate::templates::components::view_href;
use crate::templates::pages::{self, CustomersVm, DashboardVm, WebLeadsVm, ZonesVm};

/// Form and JSON bodies larger than this are refused.
const MAX_BODY_BYTES: u64 = 64 * 1024;

type Pairs = Vec<(String, String)>;

/// Everything a request handler needs, shared by all astra workers.
pub struct AppState {
    pub db: Database,
    pub config: Config,
    pub commits: CommitGuard,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        Self {
            db,
            config,
            commits: CommitGuard::default(),
        }
    }
}

/// Process-wide set of records with a save in flight.
#[derive(Debug, Default)]
pub struct CommitGuard {
    in_flight: Mutex<HashSet<String>>,
}

/// Held for the duration of one save; releases its key on drop.
#[derive(Debug)]
pub struct CommitTicket<'a> {
    guard: &'a CommitGuard,
    key: String,
}

impl CommitGuard {
    /// `None` when the same key is already being saved by another request.
    pub fn try_acquire(&self, key: impl Into<String>) -> Option<CommitTicket<'_>> {
        let key = key.into();
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        if !in_flight.insert(key.clone()) {
            return None;
        }
        Some(CommitTicket { guard: self, key })
    }
}

impl Drop for CommitTicket<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.guard.in_flight.lock().unwrap_or_else(|p| p.into_inner());
        in_flight.remove(&self.key);
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    // Reachable without a session.
    match (method.as_str(), path.as_str()) {
        ("GET", "/sign-in") => return html_response(pages::sign_in_page()),
        ("GET", "/static/main.css") => return stylesheet_response(),
        ("POST", "/api/web-leads") => return create_web_lead(req, state),
        _ => {}
    }

    let (gate, identity) = resolve_identity(&req, state);
    match gate.decide(&state.config.sign_in_url) {
        Access::Checking => {
            let retry = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| path.clone());
            return html_response(pages::checking_page(&retry));
        }
        Access::Redirect(url) => return see_other(&url),
        Access::Allowed => {}
    }
    let email = identity.as_ref().map(|i| i.email.as_str());

    let query = parse_pairs(req.uri().query().unwrap_or_default().as_bytes());
    let form = match method.as_str() {
        "POST" => parse_pairs(&read_body(req)?),
        _ => Vec::new(),
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let Some((head, rest)) = segments.split_first() else {
        return see_other(&Section::Dashboard.href());
    };

    let section = Section::from_fragment(head);
    if section.slug() != *head {
        return match method.as_str() {
            "GET" => see_other(&Section::Dashboard.href()),
            _ => Err(ServerError::NotFound),
        };
    }

    let request = SectionRequest {
        state,
        section,
        method: &method,
        rest,
        query: &query,
        form: &form,
    };

    match section {
        Section::Dashboard => match (method.as_str(), rest) {
            ("GET", []) => dashboard(state, email),
            _ => Err(ServerError::NotFound),
        },
        Section::Customers => {
            let store = CustomerStore::new(&state.db);
            let zones = ZoneStore::new(&state.db).list()?;
            let render = |view: &ViewController<Customer>,
                          notice: Option<&str>,
                          form_error: Option<&str>|
             -> Markup {
                pages::customers_page(&CustomersVm {
                    email,
                    view,
                    zones: &zones,
                    notice,
                    form_error,
                })
            };
            request.dispatch(&store, render)
        }
        Section::WebLeads => {
            let store = WebLeadStore::new(&state.db);
            let render = |view: &ViewController<WebLead>,
                          notice: Option<&str>,
                          form_error: Option<&str>|
             -> Markup {
                pages::web_leads_page(&WebLeadsVm {
                    email,
                    view,
                    notice,
                    form_error,
                })
            };
            request.dispatch(&store, render)
        }
        Section::Zones => {
            let store = ZoneStore::new(&state.db);
            let render = |view: &ViewController<Zone>,
                          notice: Option<&str>,
                          form_error: Option<&str>|
             -> Markup {
                pages::zones_page(&ZonesVm {
                    email,
                    view,
                    notice,
                    form_error,
                })
            };
            request.dispatch(&store, render)
        }
    }
}

fn dashboard(state: &AppState, email: Option<&str>) -> ResultResp {
    let page_size = state.config.page_size;
    let customers = ViewController::new(CustomerStore::new(&state.db).list()?, page_size);
    let leads = ViewController::new(WebLeadStore::new(&state.db).list()?, page_size);
    let zone_count = ZoneStore::new(&state.db).list()?.len();

    html_response(pages::dashboard_page(&DashboardVm {
        email,
        zone_count,
        customer_totals: customers.status_totals(),
        lead_totals: leads.status_totals(),
    }))
}

/// One request against an entity section, after auth and body parsing.
struct SectionRequest<'a> {
    state: &'a AppState,
    section: Section,
    method: &'a str,
    /// Path segments after the section slug.
    rest: &'a [&'a str],
    query: &'a Pairs,
    form: &'a Pairs,
}

impl SectionRequest<'_> {
    fn dispatch<E, S, R>(&self, store: &S, render: R) -> ResultResp
    where
        E: Entity,
        S: EntityStore<E>,
        R: Fn(&ViewController<E>, Option<&str>, Option<&str>) -> Markup,
    {
        match (self.method, self.rest) {
            ("GET", []) => self.list(store, render),
            ("POST", []) => self.save(store, None, render),
            ("POST", [id]) => self.save(store, Some(*id), render),
            ("POST", [id, "delete"]) => self.remove(store, id, render),
            _ => Err(ServerError::NotFound),
        }
    }

    fn filters(&self) -> FilterState {
        FilterState::from_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn open_view<E, S>(&self, store: &S) -> Result<ViewController<E>, ServerError>
    where
        E: Entity,
        S: EntityStore<E>,
    {
        let snapshot = store.list()?;
        Ok(ViewController::new(snapshot, self.state.config.page_size).with_filters(self.filters()))
    }

    fn list_url<E: Entity>(&self, view: &ViewController<E>) -> String {
        view_href(&self.section.href(), view.filters(), None)
    }

    fn list<E, S, R>(&self, store: &S, render: R) -> ResultResp
    where
        E: Entity,
        S: EntityStore<E>,
        R: Fn(&ViewController<E>, Option<&str>, Option<&str>) -> Markup,
    {
        let mut view = self.open_view(store)?;

        let opened = if let Some(id) = self.param("edit") {
            view.begin_edit(id)
        } else if self.param("new").is_some() {
            view.begin_create()
        } else if let Some(id) = self.param("detail") {
            view.view_detail(id)
        } else {
            Ok(())
        };
        // A link to a record that is gone just shows the list.
        if let Err(e) = opened {
            debug!(section = self.section.slug(), error = %e, "dialog not opened");
        }

        html_response(render(&view, None, None))
    }

    fn save<E, S, R>(&self, store: &S, target: Option<&str>, render: R) -> ResultResp
    where
        E: Entity,
        S: EntityStore<E>,
        R: Fn(&ViewController<E>, Option<&str>, Option<&str>) -> Markup,
    {
        let mut view = self.open_view(store)?;

        let _ticket = match target {
            Some(id) => {
                if view.begin_edit(id).is_err() {
                    debug!(section = self.section.slug(), record = id, "record gone, dropping edit");
                    return see_other(&self.list_url(&view));
                }
                let key = format!("{}:{id}", self.section.slug());
                let ticket = self.state.commits.try_acquire(key).ok_or_else(|| {
                    ServerError::Conflict("This record is already being saved.".into())
                })?;
                Some(ticket)
            }
            None => {
                view.begin_create().map_err(|_| ServerError::InternalError)?;
                None
            }
        };

        for (name, value) in self.form {
            if let Err(e) = view.update_field(name, value) {
                let message = e.to_string();
                return html_response_with_status(422, render(&view, None, Some(&message)));
            }
        }

        match view.commit(store) {
            Ok(CommitOutcome::Saved(record)) => {
                info!(section = self.section.slug(), record = record.id(), "saved");
                see_other(&self.list_url(&view))
            }
            Ok(CommitOutcome::Discarded) => see_other(&self.list_url(&view)),
            Err(e) => html_response_with_status(failure_status(&e), render(&view, None, None)),
        }
    }

    fn remove<E, S, R>(&self, store: &S, id: &str, render: R) -> ResultResp
    where
        E: Entity,
        S: EntityStore<E>,
        R: Fn(&ViewController<E>, Option<&str>, Option<&str>) -> Markup,
    {
        match store.delete(id) {
            Ok(()) => {
                info!(section = self.section.slug(), record = id, "deleted");
            }
            Err(StoreError::NotFound(_)) => {
                debug!(section = self.section.slug(), record = id, "already deleted");
            }
            Err(e) => {
                warn!(section = self.section.slug(), record = id, error = %e, "delete failed");
                let view = self.open_view(store)?;
                let status = match &e {
                    StoreError::Rejected(_) => 409,
                    _ => 503,
                };
                return html_response_with_status(status, render(&view, Some(&e.to_string()), None));
            }
        }
        see_other(&view_href(&self.section.href(), &self.filters(), None))
    }
}

/// Validation and refused writes are the user's to fix; anything else is the
/// backend being unavailable.
fn failure_status(e: &EditError) -> u16 {
    match e {
        e if e.is_validation() => 422,
        EditError::Store(StoreError::Rejected(_)) => 422,
        EditError::AlreadySubmitting => 409,
        _ => 503,
    }
}

/// Lead intake used by the public site. Authorised by a shared key rather
/// than a session.
fn create_web_lead(req: Request, state: &AppState) -> ResultResp {
    let Some(expected) = state.config.lead_api_key.as_deref() else {
        return Err(ServerError::NotFound);
    };
    let presented = req
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !secret_matches(presented, expected) {
        warn!("lead intake rejected: bad api key");
        return Err(ServerError::Unauthorized("invalid api key".into()));
    }

    let body = read_body(req)?;
    let fields: WebLeadFields = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("invalid lead payload: {e}")))?;
    let fields = fields.normalized();

    let mut session = EditSession::<WebLeadDraft>::begin_new();
    session.update_field("full_name", &fields.full_name)?;
    session.update_field("phone", fields.phone.as_deref().unwrap_or_default())?;
    session.update_field("email", fields.email.as_deref().unwrap_or_default())?;
    session.update_field("status", fields.status.as_str())?;
    session.update_field(
        "requested_products",
        fields.requested_products.as_deref().unwrap_or_default(),
    )?;

    let lead = session.commit(&WebLeadStore::new(&state.db))?;
    info!(lead = %lead.id, "web lead received");
    json_response(201, &lead)
}

/// Session cookie → identity. A failed lookup leaves the gate unloaded.
fn resolve_identity(req: &Request, state: &AppState) -> (AccessGate, Option<Identity>) {
    let token = req
        .headers()
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_cookie);
    let Some(token) = token else {
        return (
            AccessGate {
                loaded: true,
                authenticated: false,
            },
            None,
        );
    };

    match state
        .db
        .with_conn(|conn| load_user_from_session(conn, token, now_unix()))
    {
        Ok(identity) => (
            AccessGate {
                loaded: true,
                authenticated: identity.is_some(),
            },
            identity,
        ),
        Err(e) => {
            warn!(error = %e, "session lookup failed");
            (
                AccessGate {
                    loaded: false,
                    authenticated: false,
                },
                None,
            )
        }
    }
}

fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    if buf.len() as u64 > MAX_BODY_BYTES {
        warn!(limit = MAX_BODY_BYTES, "request body too large");
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(buf)
}

fn parse_pairs(raw: &[u8]) -> Pairs {
    url::form_urlencoded::parse(raw).into_owned().collect()
}
