//! Built-in renderers for the event types the host emits.

use super::record::{EventRecord, Identity, Team};
use super::registry::{MessageRegistry, Summary};

pub(crate) fn register_defaults(registry: &mut MessageRegistry) {
    registry
        .register("deployment", deployment)
        .register("deployment-delete", deployment_delete)
        .register("deployment-freeze", deployment_freeze)
        .register("deployment-unfreeze", deployment_unfreeze)
        .register("alias", alias)
        .register("alias-delete", alias_delete)
        .register("domain", domain)
        .register("domain-buy", domain_buy)
        .register("domain-delete", domain_delete)
        .register("cert", cert)
        .register("cert-renew", cert_renew)
        .register("cert-delete", cert_delete)
        .register("dns", dns)
        .register("dns-delete", dns_delete)
        .register("scale", scale)
        .register("secret-add", secret_add)
        .register("secret-delete", secret_delete)
        .register("login", login)
        .register("team-member-join", team_member_join)
        .register("username-update", username_update);
}

/// "You" for the signed-in user, otherwise the actor's username.
fn actor(event: &EventRecord, user: &Identity) -> String {
    match event.actor_uid() {
        Some(uid) if !user.uid.is_empty() && uid == user.uid => "You".to_string(),
        _ => event.actor_name().unwrap_or("Someone").to_string(),
    }
}

fn field<'a>(event: &'a EventRecord, key: &str) -> &'a str {
    event.payload_str(key).unwrap_or_default()
}

fn said(event: &EventRecord, user: &Identity, verb: &str) -> Summary {
    Summary::new().text(format!("{} {}", actor(event, user), verb))
}

fn deployment(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "deployed ").code(field(event, "deploymentUrl"))
}

fn deployment_delete(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    let url = event
        .payload_str("deploymentUrl")
        .or_else(|| event.payload_str("url"))
        .unwrap_or_default();
    said(event, user, "deleted ").code(url)
}

fn deployment_freeze(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "froze ").bold(field(event, "url"))
}

fn deployment_unfreeze(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "unfroze ").bold(field(event, "url"))
}

fn alias(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    match event.payload_str("deploymentUrl").filter(|u| !u.is_empty()) {
        Some(target) => said(event, user, "aliased ")
            .bold(target)
            .text(" to ")
            .bold(field(event, "alias")),
        None => said(event, user, "configured alias ").bold(field(event, "alias")),
    }
}

fn alias_delete(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "removed alias ").bold(field(event, "alias"))
}

fn domain_name(event: &EventRecord) -> &str {
    event
        .payload_str("name")
        .or_else(|| event.payload_str("domain"))
        .unwrap_or_default()
}

fn domain(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "added domain ").bold(domain_name(event))
}

fn domain_buy(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "bought domain ").bold(domain_name(event))
}

fn domain_delete(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "deleted domain ").bold(domain_name(event))
}

fn cert(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "created a certificate for ").bold(field(event, "cn"))
}

fn cert_renew(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "renewed the certificate for ").bold(field(event, "cn"))
}

fn cert_delete(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "deleted the certificate for ").bold(field(event, "cn"))
}

fn dns(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "added a ")
        .bold(field(event, "type"))
        .text(" record for ")
        .bold(field(event, "domain"))
}

fn dns_delete(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "removed a DNS record from ").bold(field(event, "domain"))
}

fn scale(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    let bound = |key: &str| {
        event
            .get(&format!("payload.scale.{}", key))
            .and_then(|v| v.as_u64())
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string())
    };
    said(event, user, "scaled ")
        .bold(field(event, "url"))
        .text(" to ")
        .bold(bound("min"))
        .text("–")
        .bold(bound("max"))
        .text(" instances")
}

fn secret_add(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "added secret ").bold(field(event, "name"))
}

fn secret_delete(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "removed secret ").bold(field(event, "name"))
}

fn login(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "logged in")
}

fn team_member_join(event: &EventRecord, user: &Identity, team: Option<&Team>) -> Summary {
    let name = team.map(Team::display_name).unwrap_or("the team");
    said(event, user, "joined ").bold(name)
}

fn username_update(event: &EventRecord, user: &Identity, _team: Option<&Team>) -> Summary {
    said(event, user, "changed the username to ").bold(field(event, "username"))
}
