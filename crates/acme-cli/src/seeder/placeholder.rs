//! The compiled-in sample dataset served by `GET /seed`.

use acme_models::InvoiceStatus;
use chrono::NaiveDate;
use uuid::Uuid;

use super::models::{CustomerSeed, InvoiceSeed, RevenueSeed, SeedData, UserSeed};

const USER_ID: Uuid = Uuid::from_u128(0x410544b2_4001_4271_9855_fec4b6a6442a);

const EVIL_RABBIT: Uuid = Uuid::from_u128(0xd6e15727_9fe1_4961_8c5b_ea44a9bd81aa);
const DELBA_DE_OLIVEIRA: Uuid = Uuid::from_u128(0x3958dc9e_712f_4377_85e9_fec4b6a6442a);
const LEE_ROBINSON: Uuid = Uuid::from_u128(0x3958dc9e_742f_4377_85e9_fec4b6a6442a);
const MICHAEL_NOVOTNY: Uuid = Uuid::from_u128(0x76d65c26_f784_44a2_ac19_586678f7c2f2);
const AMY_BURNS: Uuid = Uuid::from_u128(0xcc27c14a_0acf_4f4a_a6c9_d45682c144b9);
const BALAZS_ORBAN: Uuid = Uuid::from_u128(0x13d07535_c59e_4157_a011_f8d2ef4e0cbb);

impl SeedData {
    /// One dashboard user, six customers, thirteen invoices and a year of
    /// monthly revenue.
    pub fn placeholder() -> Self {
        SeedData::default()
            .with_users(placeholder_users())
            .with_customers(placeholder_customers())
            .with_invoices(placeholder_invoices())
            .with_revenue(placeholder_revenue())
    }
}

fn placeholder_users() -> Vec<UserSeed> {
    vec![UserSeed {
        id: USER_ID,
        name: "User".to_string(),
        email: "user@nextmail.com".to_string(),
        password: "123456".to_string(),
    }]
}

fn placeholder_customers() -> Vec<CustomerSeed> {
    [
        (EVIL_RABBIT, "Evil Rabbit", "evil@rabbit.com", "evil-rabbit"),
        (
            DELBA_DE_OLIVEIRA,
            "Delba de Oliveira",
            "delba@oliveira.com",
            "delba-de-oliveira",
        ),
        (LEE_ROBINSON, "Lee Robinson", "lee@robinson.com", "lee-robinson"),
        (
            MICHAEL_NOVOTNY,
            "Michael Novotny",
            "michael@novotny.com",
            "michael-novotny",
        ),
        (AMY_BURNS, "Amy Burns", "amy@burns.com", "amy-burns"),
        (BALAZS_ORBAN, "Balazs Orban", "balazs@orban.com", "balazs-orban"),
    ]
    .into_iter()
    .map(|(id, name, email, slug)| CustomerSeed {
        id,
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{slug}.png"),
    })
    .collect()
}

fn placeholder_invoices() -> Vec<InvoiceSeed> {
    use InvoiceStatus::{Paid, Pending};

    [
        (EVIL_RABBIT, 15795, Pending, (2022, 12, 6)),
        (DELBA_DE_OLIVEIRA, 20348, Pending, (2022, 11, 14)),
        (AMY_BURNS, 3040, Paid, (2022, 10, 29)),
        (MICHAEL_NOVOTNY, 44800, Paid, (2023, 9, 10)),
        (BALAZS_ORBAN, 34577, Pending, (2023, 8, 5)),
        (LEE_ROBINSON, 54246, Pending, (2023, 7, 16)),
        (EVIL_RABBIT, 666, Pending, (2023, 6, 27)),
        (MICHAEL_NOVOTNY, 32545, Paid, (2023, 6, 9)),
        (AMY_BURNS, 1250, Paid, (2023, 6, 17)),
        (BALAZS_ORBAN, 8546, Paid, (2023, 6, 7)),
        (DELBA_DE_OLIVEIRA, 500, Paid, (2023, 8, 19)),
        (BALAZS_ORBAN, 8945, Paid, (2023, 6, 3)),
        (LEE_ROBINSON, 1000, Paid, (2022, 6, 5)),
    ]
    .into_iter()
    .map(|(customer_id, amount, status, (y, m, d))| InvoiceSeed {
        customer_id,
        amount,
        status,
        date: NaiveDate::from_ymd_opt(y, m, d).expect("fixture invoice dates are valid"),
    })
    .collect()
}

fn placeholder_revenue() -> Vec<RevenueSeed> {
    [
        ("Jan", 2000),
        ("Feb", 1800),
        ("Mar", 2200),
        ("Apr", 2500),
        ("May", 2300),
        ("Jun", 3200),
        ("Jul", 3500),
        ("Aug", 3700),
        ("Sep", 2500),
        ("Oct", 2800),
        ("Nov", 3000),
        ("Dec", 4800),
    ]
    .into_iter()
    .map(|(month, revenue)| RevenueSeed {
        month: month.to_string(),
        revenue,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use acme_models::revenue::MONTH_MAX_LEN;
    use std::collections::HashSet;

    #[test]
    fn test_placeholder_sizes() {
        let data = SeedData::placeholder();
        assert_eq!(data.users.len(), 1);
        assert_eq!(data.customers.len(), 6);
        assert_eq!(data.invoices.len(), 13);
        assert_eq!(data.revenue.len(), 12);
        assert_eq!(data.len(), 32);
    }

    #[test]
    fn test_user_ids_and_emails_unique() {
        let data = SeedData::placeholder();
        let ids: HashSet<_> = data.users.iter().map(|u| u.id).collect();
        let emails: HashSet<_> = data.users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(ids.len(), data.users.len());
        assert_eq!(emails.len(), data.users.len());
    }

    #[test]
    fn test_customer_ids_unique() {
        let data = SeedData::placeholder();
        let ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), data.customers.len());
    }

    #[test]
    fn test_invoices_reference_known_customers() {
        let data = SeedData::placeholder();
        let ids: HashSet<_> = data.customers.iter().map(|c| c.id).collect();
        for invoice in &data.invoices {
            assert!(ids.contains(&invoice.customer_id));
        }
    }

    #[test]
    fn test_revenue_months_fit_column_and_are_unique() {
        let data = SeedData::placeholder();
        let months: HashSet<_> = data.revenue.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months.len(), data.revenue.len());
        assert!(data.revenue.iter().all(|r| r.month.len() <= MONTH_MAX_LEN));
    }

    #[test]
    fn test_image_urls_point_at_customer_assets() {
        let data = SeedData::placeholder();
        assert_eq!(data.customers[0].image_url, "/customers/evil-rabbit.png");
        assert!(
            data.customers
                .iter()
                .all(|c| c.image_url.starts_with("/customers/") && c.image_url.ends_with(".png"))
        );
    }
}
