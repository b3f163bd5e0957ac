//! Client routes and the signed-in / signed-out redirect rules.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    SignUp,
    Dashboard,
    Profile,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/",
            Route::SignUp => "/signup",
            Route::Dashboard => "/dashboard",
            Route::Profile => "/profile",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::SignIn),
            "/signup" => Some(Route::SignUp),
            "/dashboard" => Some(Route::Dashboard),
            "/profile" => Some(Route::Profile),
            _ => None,
        }
    }

    /// Routes that need a signed-in user.
    pub fn is_private(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Profile)
    }

    /// Where a request for this route actually lands.
    ///
    /// Private routes send signed-out users to sign-in; public routes send
    /// signed-in users to the dashboard.
    pub fn resolve(self, signed_in: bool) -> Route {
        match (self.is_private(), signed_in) {
            (true, false) => Route::SignIn,
            (false, true) => Route::Dashboard,
            _ => self,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [Route::SignIn, Route::SignUp, Route::Dashboard, Route::Profile] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/forgot"), None);
    }

    #[test]
    fn redirects() {
        assert_eq!(Route::Dashboard.resolve(false), Route::SignIn);
        assert_eq!(Route::Profile.resolve(true), Route::Profile);
        assert_eq!(Route::SignIn.resolve(true), Route::Dashboard);
        assert_eq!(Route::SignUp.resolve(false), Route::SignUp);
    }
}
