//! Client context shared by every page: API client, auth state and toasts.

use crate::api::ApiClient;
use crate::config::GoBarberConfig;
use crate::dashboard::{Dashboard, DayRequest, MonthRequest};
use crate::error::GoBarberResult;
use crate::route::Route;
use crate::session::{Auth, SessionStore};
use crate::toast::Toasts;

pub struct App {
    pub api: ApiClient,
    pub auth: Auth,
    pub toasts: Toasts,
}

impl App {
    /// Load configuration and the saved session from their default locations.
    pub fn load() -> GoBarberResult<Self> {
        let config = GoBarberConfig::load()?;
        Self::new(&config, SessionStore::default_location()?)
    }

    pub fn new(config: &GoBarberConfig, store: SessionStore) -> GoBarberResult<Self> {
        Ok(Self::with_api(ApiClient::new(config)?, Auth::load(store)?))
    }

    pub fn with_api(mut api: ApiClient, auth: Auth) -> Self {
        api.set_token(auth.token().map(str::to_string));
        App {
            api,
            auth,
            toasts: Toasts::new(),
        }
    }

    /// The route that actually renders when `route` is requested.
    pub fn navigate(&self, route: Route) -> Route {
        route.resolve(self.auth.is_signed_in())
    }

    /// Dashboard for the signed-in provider, starting today.
    pub fn dashboard(&self) -> GoBarberResult<Dashboard> {
        let user = self.auth.require_user()?;
        Ok(Dashboard::for_today(user.id.clone()))
    }

    /// Fetch availability for `request` and apply it. Returns whether the
    /// response was still current.
    pub async fn load_month(
        &self,
        dashboard: &mut Dashboard,
        request: MonthRequest,
    ) -> GoBarberResult<bool> {
        let items = self.api.month_availability(&request).await?;
        Ok(dashboard.apply_availability(&request, items))
    }

    /// Fetch the appointment list for `request` and apply it.
    pub async fn load_schedule(
        &self,
        dashboard: &mut Dashboard,
        request: DayRequest,
    ) -> GoBarberResult<bool> {
        let appointments = self.api.provider_appointments(request).await?;
        Ok(dashboard.apply_appointments(request, appointments))
    }
}
