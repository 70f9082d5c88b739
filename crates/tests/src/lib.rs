
#[cfg(test)]
mod render_tests;

#[cfg(test)]
mod notification_tests;


#[cfg(test)]
mod delivery_tests;
