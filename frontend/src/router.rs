use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/all-loans")]
    AllLoans,

    #[at("/loan-details/:id")]
    LoanDetails { id: String },

    #[at("/apply-loan/:id")]
    ApplyLoan { id: String },

    #[at("/dashboard/all-loans")]
    AdminLoans,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::AllLoans => html! { <pages::all_loans::AllLoansPage /> },
        Route::LoanDetails {
            id,
        } => {
            html! { <pages::loan_detail::LoanDetailPage id={id} /> }
        },
        Route::ApplyLoan {
            id,
        } => {
            html! { <pages::apply_loan::ApplyLoanPage id={id} /> }
        },
        Route::AdminLoans => html! { <pages::admin_loans::AdminLoansPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1 pt-[var(--space-sm)]">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
