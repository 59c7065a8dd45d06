use tastegap::Restaurant;

/// `n` restaurants with generated names, no reviews.
pub fn restaurants(cuisine: &str, borough: &str, zipcode: &str, n: usize) -> Vec<Restaurant> {
    (0..n)
        .map(|i| {
            Restaurant::new(
                format!("{cuisine} {borough} {zipcode} #{i}"),
                cuisine,
                borough,
                zipcode,
            )
        })
        .collect()
}

/// A small city with a known answer.
///
/// | borough   | zipcode | Pizza | Chinese | Bakery |
/// |-----------|---------|-------|---------|--------|
/// | Manhattan | 10001   | 6     | 2       | 0      |
/// | Queens    | 11373   | 1     | 0       | 0      |
/// | Brooklyn  | 11201   | 1     | 2       | 1      |
/// | Brooklyn  | 11215   | 4     | 2       | 3      |
///
/// Pizza is most common (12 of 22), Brooklyn has the smallest Pizza share
/// (5 of 13), 11201 the smallest within Brooklyn (1 of 4). Its one pizzeria,
/// Di Fara, has four reviews averaging 10.
pub fn city() -> Vec<Restaurant> {
    let mut records = vec![];

    records.extend(restaurants("Pizza", "Manhattan", "10001", 6));
    records.extend(restaurants("Chinese", "Manhattan", "10001", 2));

    records.extend(restaurants("Pizza", "Queens", "11373", 1));

    records.push(
        Restaurant::new("Di Fara", "Pizza", "Brooklyn", "11201").with_scores([9.0, 11.0, 10.0, 10.0]),
    );
    records.extend(restaurants("Chinese", "Brooklyn", "11201", 2));
    records.extend(restaurants("Bakery", "Brooklyn", "11201", 1));

    records.extend(restaurants("Pizza", "Brooklyn", "11215", 4));
    records.extend(restaurants("Chinese", "Brooklyn", "11215", 2));
    records.extend(restaurants("Bakery", "Brooklyn", "11215", 3));

    records
}
