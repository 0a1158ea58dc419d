use crate::pages::{LoginPage, SignUpPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/signup")]
    SignUp,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::SignUp => html! { <SignUpPage /> },
        // Everything else lands on the login page
        Route::Home | Route::NotFound => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_auth_routes() {
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/signup"), Some(Route::SignUp));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/does-not-exist"), Some(Route::NotFound));
    }

    #[test]
    fn route_paths_match_the_form_footer_links() {
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::SignUp.to_path(), "/signup");
    }
}
