//! Fixture records fed to the seeder.
//!
//! These mirror the table rows but carry what the fixture supplies rather
//! than what ends up stored: users hold a plaintext password, invoices have
//! no id of their own.

use acme_models::InvoiceStatus;
use chrono::NaiveDate;
use uuid::Uuid;

/// Seed data for creating a user. The password is hashed before insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSeed {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Seed data for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSeed {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Seed data for creating an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSeed {
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Seed data for a month of revenue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueSeed {
    pub month: String,
    pub revenue: i32,
}

/// The complete dataset for one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub users: Vec<UserSeed>,
    pub customers: Vec<CustomerSeed>,
    pub invoices: Vec<InvoiceSeed>,
    pub revenue: Vec<RevenueSeed>,
}

impl SeedData {
    pub fn with_users(mut self, users: Vec<UserSeed>) -> Self {
        self.users = users;
        self
    }

    pub fn with_customers(mut self, customers: Vec<CustomerSeed>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_invoices(mut self, invoices: Vec<InvoiceSeed>) -> Self {
        self.invoices = invoices;
        self
    }

    pub fn with_revenue(mut self, revenue: Vec<RevenueSeed>) -> Self {
        self.revenue = revenue;
        self
    }

    /// Total number of records across all four groups.
    pub fn len(&self) -> usize {
        self.users.len() + self.customers.len() + self.invoices.len() + self.revenue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
