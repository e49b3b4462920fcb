use loan_market_shared::LoanRecord;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::loan_card as t, router::Route};

#[derive(Properties, PartialEq, Clone)]
pub struct LoanCardProps {
    pub loan: LoanRecord,
}

#[function_component(LoanCard)]
pub fn loan_card(props: &LoanCardProps) -> Html {
    let loan = &props.loan;
    let detail_route = Route::LoanDetails {
        id: loan.id.to_string(),
    };

    html! {
        <article class="loan-card">
            {
                if loan.fields.image_data.is_empty() {
                    html! {}
                } else {
                    html! {
                        <Link<Route> to={detail_route.clone()} classes={classes!("featured-image")}>
                            <img src={loan.fields.image_data.clone()} alt={loan.title().to_string()} loading="lazy" />
                        </Link<Route>>
                    }
                }
            }
            <span class="loan-category-pill">{ loan.category() }</span>
            <h3 class="loan-title">
                <Link<Route> to={detail_route.clone()} classes={classes!("loan-title-link")}>
                    { loan.title() }
                </Link<Route>>
            </h3>
            <p class="loan-excerpt">{ &loan.fields.short_description }</p>
            <dl class="loan-meta">
                <div class="loan-meta-item">
                    <dt>{ t::MAX_LOAN }</dt>
                    <dd>{ loan.max_loan_display() }</dd>
                </div>
                <div class="loan-meta-item">
                    <dt>{ t::INTEREST }</dt>
                    <dd>{ loan.interest_rate_display() }</dd>
                </div>
            </dl>
            <Link<Route> to={detail_route} classes={classes!("btn-fluent-primary", "loan-card-cta")}>
                { t::VIEW_DETAILS }
            </Link<Route>>
        </article>
    }
}
