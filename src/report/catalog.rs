//! The built-in reports, in presentation order.

use super::{ReportDef, ReportKind};

pub(super) const REPORTS: &[ReportDef] = &[
    ReportDef {
        key: "providers_receivers_per_city",
        kind: ReportKind::Aggregate,
        sql: "
SELECT City,
       COUNT(DISTINCT Provider_ID) AS Providers,
       COUNT(DISTINCT Receiver_ID) AS Receivers
FROM (
    SELECT City, Provider_ID, NULL AS Receiver_ID FROM Providers
    UNION ALL
    SELECT City, NULL, Receiver_ID FROM Receivers
)
GROUP BY City",
    },
    ReportDef {
        key: "top_provider_type",
        kind: ReportKind::TopN(1),
        sql: "
SELECT Type, COUNT(*) AS Total_Providers
FROM Providers
GROUP BY Type
ORDER BY Total_Providers DESC
LIMIT 1",
    },
    ReportDef {
        key: "contact_providers_in_mumbai",
        kind: ReportKind::Aggregate,
        sql: "
SELECT Name, Contact, City
FROM Providers
WHERE City = 'Mumbai'",
    },
    ReportDef {
        key: "top_5_receivers_by_claims",
        kind: ReportKind::TopN(5),
        sql: "
SELECT r.Name, COUNT(c.Claim_ID) AS Total_Claims
FROM Claims c
JOIN Receivers r ON c.Receiver_ID = r.Receiver_ID
GROUP BY r.Name
ORDER BY Total_Claims DESC
LIMIT 5",
    },
    ReportDef {
        key: "total_food_quantity_available",
        kind: ReportKind::Aggregate,
        sql: "
SELECT SUM(Quantity) AS Total_Quantity
FROM Food_Listings",
    },
    ReportDef {
        key: "city_with_most_listings",
        kind: ReportKind::TopN(1),
        sql: "
SELECT Location, COUNT(*) AS Listings
FROM Food_Listings
GROUP BY Location
ORDER BY Listings DESC
LIMIT 1",
    },
    ReportDef {
        key: "most_common_food_types",
        kind: ReportKind::Aggregate,
        sql: "
SELECT Food_Type, COUNT(*) AS Count
FROM Food_Listings
GROUP BY Food_Type
ORDER BY Count DESC",
    },
    ReportDef {
        key: "claims_per_food_item",
        kind: ReportKind::Aggregate,
        sql: "
SELECT f.Food_Name, COUNT(c.Claim_ID) AS Claim_Count
FROM Claims c
JOIN Food_Listings f ON c.Food_ID = f.Food_ID
GROUP BY f.Food_Name
ORDER BY Claim_Count DESC",
    },
    ReportDef {
        key: "top_provider_by_successful_claims",
        kind: ReportKind::TopN(1),
        sql: "
SELECT p.Name, COUNT(c.Claim_ID) AS Successful_Claims
FROM Claims c
JOIN Food_Listings f ON c.Food_ID = f.Food_ID
JOIN Providers p ON f.Provider_ID = p.Provider_ID
WHERE c.Status = 'Successful'
GROUP BY p.Name
ORDER BY Successful_Claims DESC
LIMIT 1",
    },
    ReportDef {
        key: "claim_status_distribution",
        kind: ReportKind::Aggregate,
        sql: "
SELECT Status, COUNT(*) AS Count
FROM Claims
GROUP BY Status",
    },
    ReportDef {
        key: "avg_quantity_per_receiver",
        kind: ReportKind::Aggregate,
        sql: "
SELECT r.Name, AVG(f.Quantity) AS Avg_Quantity
FROM Claims c
JOIN Receivers r ON c.Receiver_ID = r.Receiver_ID
JOIN Food_Listings f ON c.Food_ID = f.Food_ID
GROUP BY r.Name",
    },
    ReportDef {
        key: "most_claimed_meal_type",
        kind: ReportKind::TopN(1),
        sql: "
SELECT f.Meal_Type, COUNT(*) AS Claim_Count
FROM Claims c
JOIN Food_Listings f ON c.Food_ID = f.Food_ID
GROUP BY f.Meal_Type
ORDER BY Claim_Count DESC
LIMIT 1",
    },
    ReportDef {
        key: "quantity_donated_by_provider",
        kind: ReportKind::Aggregate,
        sql: "
SELECT p.Name, SUM(f.Quantity) AS Total_Quantity
FROM Food_Listings f
JOIN Providers p ON f.Provider_ID = p.Provider_ID
GROUP BY p.Name
ORDER BY Total_Quantity DESC",
    },
    ReportDef {
        key: "food_expiring_in_3_days",
        kind: ReportKind::ExpiryWindow { days: 3 },
        sql: "
SELECT Food_Name, Expiry_Date
FROM Food_Listings
WHERE date(Expiry_Date) BETWEEN :today AND date(:today, '+' || :days || ' days')
ORDER BY date(Expiry_Date), Food_ID",
    },
    ReportDef {
        key: "top_cities_by_successful_claims",
        kind: ReportKind::Aggregate,
        sql: "
SELECT f.Location, COUNT(*) AS Successful_Claims
FROM Claims c
JOIN Food_Listings f ON c.Food_ID = f.Food_ID
WHERE c.Status = 'Successful'
GROUP BY f.Location
ORDER BY Successful_Claims DESC",
    },
    ReportDef {
        key: "top_5_providers_by_quantity",
        kind: ReportKind::TopN(5),
        sql: "
SELECT p.Name, SUM(f.Quantity) AS Total_Quantity
FROM Food_Listings f
JOIN Providers p ON f.Provider_ID = p.Provider_ID
GROUP BY p.Name
ORDER BY Total_Quantity DESC
LIMIT 5",
    },
    ReportDef {
        key: "top_5_receivers_by_successful_claims",
        kind: ReportKind::TopN(5),
        sql: "
SELECT r.Name, COUNT(c.Claim_ID) AS Successful_Claims
FROM Claims c
JOIN Receivers r ON c.Receiver_ID = r.Receiver_ID
WHERE c.Status = 'Successful'
GROUP BY r.Name
ORDER BY Successful_Claims DESC
LIMIT 5",
    },
    ReportDef {
        key: "food_type_distribution_in_successful_claims",
        kind: ReportKind::Aggregate,
        sql: "
SELECT f.Food_Type, COUNT(*) AS Successful_Claims
FROM Claims c
JOIN Food_Listings f ON c.Food_ID = f.Food_ID
WHERE c.Status = 'Successful'
GROUP BY f.Food_Type
ORDER BY Successful_Claims DESC",
    },
    ReportDef {
        key: "daily_claim_trends",
        kind: ReportKind::DailyTrend,
        sql: "
SELECT DATE(Timestamp) AS Claim_Date, COUNT(*) AS Total_Claims
FROM Claims
GROUP BY Claim_Date
ORDER BY Claim_Date",
    },
    ReportDef {
        key: "food_items_claimed_multiple_times",
        kind: ReportKind::Aggregate,
        sql: "
SELECT f.Food_Name, COUNT(c.Claim_ID) AS Claim_Count
FROM Claims c
JOIN Food_Listings f ON c.Food_ID = f.Food_ID
GROUP BY f.Food_Name
HAVING Claim_Count > 1
ORDER BY Claim_Count DESC",
    },
    // grouped by provider id so two providers sharing a name stay separate
    ReportDef {
        key: "providers_with_100_percent_successful_claims",
        kind: ReportKind::AllSuccessful,
        sql: "
SELECT p.Name
FROM Providers p
JOIN Food_Listings f ON p.Provider_ID = f.Provider_ID
JOIN Claims c ON f.Food_ID = c.Food_ID
GROUP BY p.Provider_ID
HAVING SUM(CASE WHEN c.Status = 'Successful' THEN 1 ELSE 0 END) = COUNT(c.Claim_ID)
ORDER BY p.Provider_ID",
    },
];
