//! Liveness message served at the root path.

use salvo::prelude::*;

pub(crate) const HOME_MESSAGE: &str = "Libam Shipping Server is Running!";

#[handler]
pub(crate) async fn handler(res: &mut Response) {
    res.render(Text::Plain(HOME_MESSAGE));
}
